//! Runs automation rules against a [`MondayApi`].

use chrono::NaiveDate;
use monday::{Board, BoardId, MondayApi, MondayError};
use tracing::{info, instrument, warn};

use crate::reset_week::{plan_reset_week, prepare_board};
use crate::AutomationConfig;

/// What the reset-week rule did on one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOutcome {
    pub board: BoardId,
    pub name: String,
    /// Cards moved to the completed group.
    pub completed: usize,
    /// Cards moved into this week's group.
    pub scheduled: usize,
}

impl std::fmt::Display for BoardOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} completed, {} scheduled for this week",
            self.name, self.completed, self.scheduled
        )
    }
}

/// Result of one reset-week run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetWeekReport {
    pub boards: Vec<BoardOutcome>,
    /// Configured board names that do not exist in the account.
    pub missing_boards: Vec<String>,
}

/// Applies the configured rules through a [`MondayApi`] implementation.
pub struct Automator<A> {
    api: A,
    config: AutomationConfig,
}

impl<A: MondayApi> Automator<A> {
    pub fn new(api: A, config: AutomationConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &AutomationConfig {
        &self.config
    }

    /// Returns the first board whose name matches exactly.
    ///
    /// # Errors
    ///
    /// [`MondayError::BoardNotFound`] if no board has that name, or the API
    /// error from listing boards.
    #[instrument(skip(self))]
    pub async fn board_named(&self, name: &str) -> Result<Board, MondayError> {
        self.api
            .boards()
            .await?
            .into_iter()
            .find(|board| board.name == name)
            .ok_or_else(|| MondayError::BoardNotFound {
                name: name.to_string(),
            })
    }

    /// Runs the reset-week rule over every configured board.
    ///
    /// Boards are processed one at a time in account listing order. Each
    /// board's groups and rule columns are checked before its pulses are
    /// fetched. Finished cards are moved before upcoming ones. The first error
    /// stops the run; moves already made on earlier boards stand.
    #[instrument(skip(self), fields(today = %today))]
    pub async fn reset_week(&self, today: NaiveDate) -> Result<ResetWeekReport, MondayError> {
        let rule = &self.config.reset_week;
        let boards = self.api.boards().await?;

        let mut report = ResetWeekReport::default();
        for name in &rule.boards {
            if !boards.iter().any(|b| &b.name == name) {
                warn!(board = %name, "Configured board not found; skipping");
                report.missing_boards.push(name.clone());
            }
        }

        for board in boards.iter().filter(|b| rule.boards.contains(&b.name)) {
            prepare_board(board, rule)?;
            let pulses = self.api.board_pulses(board.id).await?;
            let plan = plan_reset_week(board, &pulses, rule, today)?;

            if !plan.finished.is_empty() {
                self.api
                    .move_pulses(board.id, &plan.finished, &plan.completed_group)
                    .await?;
                info!(board = %board.name, count = plan.finished.len(), "Moved finished cards to completed");
            }
            if !plan.coming_up.is_empty() {
                self.api
                    .move_pulses(board.id, &plan.coming_up, &plan.this_week_group)
                    .await?;
                info!(board = %board.name, count = plan.coming_up.len(), "Moved upcoming cards into this week");
            }

            report.boards.push(BoardOutcome {
                board: board.id,
                name: board.name.clone(),
                completed: plan.finished.len(),
                scheduled: plan.coming_up.len(),
            });
        }

        Ok(report)
    }
}
