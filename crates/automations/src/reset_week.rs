//! The reset-week rule: pure classification of a board's pulses.
//!
//! Finished cards in "This Week" go to "Completed"; cards in "Future" whose
//! timeline starts within the lookahead window come into "This Week". Nothing
//! here performs I/O; [`crate::Automator`] fetches the inputs and issues the
//! moves.

use chrono::{Days, NaiveDate};
use monday::{
    Board, BoardId, ColumnData, ColumnError, ColumnKind, Group, GroupId, MondayError, Pulse,
    PulseId,
};

use crate::ResetWeekRule;

/// The moves the rule wants to make on one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPlan {
    pub board: BoardId,
    /// Group finished cards move to.
    pub completed_group: GroupId,
    /// Group upcoming cards move to.
    pub this_week_group: GroupId,
    /// Finished cards currently in this week's group.
    pub finished: Vec<PulseId>,
    /// Future cards starting within the lookahead window.
    pub coming_up: Vec<PulseId>,
}

impl WeekPlan {
    /// Returns `true` if the plan moves nothing.
    pub fn is_empty(&self) -> bool {
        self.finished.is_empty() && self.coming_up.is_empty()
    }
}

/// The three groups the rule moves cards between, resolved on one board.
#[derive(Debug, Clone, Copy)]
pub struct WeekGroups<'a> {
    /// Where upcoming cards go and finished cards are taken from.
    pub this_week: &'a Group,
    /// Where finished cards go.
    pub completed: &'a Group,
    /// Where upcoming cards are taken from.
    pub future: &'a Group,
}

/// Checks that `board` has what `rule` needs, before any pulse is fetched.
///
/// Groups are resolved first, then the status column must be a colour column
/// and the timeline column a timerange column.
///
/// # Errors
///
/// - [`MondayError::GroupNotFound`] if any of the three groups is missing.
/// - [`MondayError::Column`] with [`ColumnError::UnknownColumn`] if the board
///   has no status or timeline column.
/// - [`MondayError::ConfigurationError`] if either column has the wrong type.
pub fn prepare_board<'a>(
    board: &'a Board,
    rule: &ResetWeekRule,
) -> Result<WeekGroups<'a>, MondayError> {
    let groups = WeekGroups {
        this_week: require_group(board, &rule.this_week_group)?,
        completed: require_group(board, &rule.completed_group)?,
        future: require_group(board, &rule.future_group)?,
    };
    require_column(board, &rule.status_column, "colour", |kind| {
        matches!(kind, ColumnKind::Color { .. })
    })?;
    require_column(board, &rule.timeline_column, "timerange", |kind| {
        matches!(kind, ColumnKind::Timerange)
    })?;
    Ok(groups)
}

/// Classifies `pulses` of `board` according to `rule`, as of `today`.
///
/// # Errors
///
/// Everything [`prepare_board`] reports, plus [`MondayError::Column`] if a
/// pulse lacks the status or timeline value or the value cannot be decoded.
pub fn plan_reset_week(
    board: &Board,
    pulses: &[Pulse],
    rule: &ResetWeekRule,
    today: NaiveDate,
) -> Result<WeekPlan, MondayError> {
    let groups = prepare_board(board, rule)?;
    let cutoff = today
        .checked_add_days(Days::new(u64::from(rule.lookahead_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut finished = Vec::new();
    let mut coming_up = Vec::new();
    for pulse in pulses {
        if pulse.is_in(&groups.this_week.id) && is_done(board, pulse, rule)? {
            finished.push(pulse.id);
        } else if pulse.is_in(&groups.future.id) && starts_by(board, pulse, rule, cutoff)? {
            coming_up.push(pulse.id);
        }
    }

    Ok(WeekPlan {
        board: board.id,
        completed_group: groups.completed.id.clone(),
        this_week_group: groups.this_week.id.clone(),
        finished,
        coming_up,
    })
}

fn require_group<'a>(board: &'a Board, title: &str) -> Result<&'a Group, MondayError> {
    board
        .group_titled(title)
        .ok_or_else(|| MondayError::GroupNotFound {
            board: board.id,
            group: title.to_string(),
        })
}

fn require_column(
    board: &Board,
    title: &str,
    expected: &str,
    accepts: impl Fn(&ColumnKind) -> bool,
) -> Result<(), MondayError> {
    let column = board
        .column_titled(title)
        .ok_or_else(|| ColumnError::UnknownColumn {
            title: title.to_string(),
        })?;
    if accepts(&column.kind) {
        Ok(())
    } else {
        Err(MondayError::ConfigurationError {
            message: format!(
                "column '{title}' on board '{}' is a {} column, expected {expected}",
                board.name,
                column.kind.type_name()
            ),
        })
    }
}

/// A card is done when its status label equals the configured done label.
/// An empty status is not done.
pub fn is_done(board: &Board, pulse: &Pulse, rule: &ResetWeekRule) -> Result<bool, MondayError> {
    match board.decode_column(pulse, &rule.status_column)? {
        ColumnData::Color(status) => Ok(status.label() == Some(rule.done_label.as_str())),
        other => Err(MondayError::ConfigurationError {
            message: format!(
                "status column '{}' on board '{}' is not a colour column (got {other:?})",
                rule.status_column, board.name
            ),
        }),
    }
}

/// A card is coming up when its timeline starts on or before `cutoff`.
/// A card without a timeline start is not coming up.
pub fn starts_by(
    board: &Board,
    pulse: &Pulse,
    rule: &ResetWeekRule,
    cutoff: NaiveDate,
) -> Result<bool, MondayError> {
    match board.decode_column(pulse, &rule.timeline_column)? {
        ColumnData::Timeline(timeline) => Ok(timeline.start.is_some_and(|start| start <= cutoff)),
        other => Err(MondayError::ConfigurationError {
            message: format!(
                "timeline column '{}' on board '{}' is not a timerange column (got {other:?})",
                rule.timeline_column, board.name
            ),
        }),
    }
}
