//! Leave records.
//!
//! An annual leave spans a date range and consumes its working-day count; a
//! parental leave is a single school-visit day tied to a child. Records are
//! serialized for the external sync layer with ISO date strings and a `kind`
//! tag distinguishing the two categories.

use al_core::ensure;
use al_core::errors::Result;
use al_core::Days;
use al_time::{Calendar, Date};
use serde::{Deserialize, Serialize};

/// An annual leave: an inclusive date range and the working days it spends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualLeave {
    /// Record key assigned by the sync layer; `None` until first persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// First day of the leave.
    pub from: Date,
    /// Last day of the leave, inclusive.
    pub until: Date,
    /// Working days spent, as counted when the record was created.
    pub days: Days,
}

impl AnnualLeave {
    /// Create a leave over `[from, until]`, counting its working days with
    /// `calendar`.
    ///
    /// Fails if `from` is after `until`.
    pub fn new<C: Calendar>(calendar: &C, from: Date, until: Date) -> Result<Self> {
        ensure!(from <= until, "leave range {from} to {until} is inverted");
        let days = calendar.working_days(Some(from), Some(until))?;
        Ok(AnnualLeave {
            id: None,
            from,
            until,
            days,
        })
    }

    /// Recount the working days of this range against `calendar`.
    ///
    /// The stored `days` is a snapshot; the UI recounts when either endpoint
    /// is edited.
    pub fn working_days<C: Calendar>(&self, calendar: &C) -> Result<Days> {
        calendar.working_days(Some(self.from), Some(self.until))
    }
}

/// A parental leave: one day off for a child's school visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentalLeave {
    /// Record key assigned by the sync layer; `None` until first persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The day taken.
    pub date: Date,
    /// Which child the visit was for.
    pub child_name: String,
}

/// A leave record of either category.
///
/// The categories are a closed set, so they are a tagged sum type rather
/// than a trait object; the tag doubles as the wire discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Leave {
    /// Annual leave over a date range.
    Annual(AnnualLeave),
    /// Single-day parental leave.
    Parental(ParentalLeave),
}

impl Leave {
    /// Working days this record consumes from its yearly quota.
    pub fn days(&self) -> Days {
        match self {
            Leave::Annual(leave) => leave.days,
            Leave::Parental(_) => 1,
        }
    }

    /// The first (or only) day of the leave.
    pub fn start_date(&self) -> Date {
        match self {
            Leave::Annual(leave) => leave.from,
            Leave::Parental(leave) => leave.date,
        }
    }
}
