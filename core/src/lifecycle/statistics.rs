use serde::Serialize;

use crate::models::{ApprovalRequest, CorrectionKind, RequestStatus};

/// Summary cards shown above an approval list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RequestStatistics {
    pub total_requests: usize,
    pub pending_requests: usize,
    pub approved_requests: usize,
    pub rejected_requests: usize,
    pub missing_punch: usize,
    pub time_correction: usize,
}

/// Counts over the collection as it is right now. Never cached.
pub fn derive_statistics<'a, R, I>(records: I) -> RequestStatistics
where
    R: ApprovalRequest + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .fold(RequestStatistics::default(), |mut stats, record| {
            stats.total_requests += 1;
            match record.status() {
                RequestStatus::Pending => stats.pending_requests += 1,
                RequestStatus::Approved => stats.approved_requests += 1,
                RequestStatus::Rejected => stats.rejected_requests += 1,
            }
            match record.correction_kind() {
                CorrectionKind::MissingPunch => stats.missing_punch += 1,
                CorrectionKind::TimeCorrection => stats.time_correction += 1,
                CorrectionKind::Confirmation | CorrectionKind::NotApplicable => {}
            }
            stats
        })
}
