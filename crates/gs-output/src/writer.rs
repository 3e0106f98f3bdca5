//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, TickSummaryRow, VehicleSnapshotRow};

/// Destination for position snapshots and tick summaries.
///
/// Errors are returned to the caller; [`SimOutputObserver`] keeps the first
/// one for [`take_error`].
///
/// [`SimOutputObserver`]: crate::SimOutputObserver
/// [`take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write a batch of vehicle snapshots.
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
