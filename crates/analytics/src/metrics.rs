use crate::record::{AnalysisRecord, JoinedRecord};
use core_types::Ratio;
use rust_decimal::Decimal;

/// Attaches `roi` and `roas` to every joined record and returns the augmented copy.
///
/// Per record:
/// - `roi  = (revenue - total_payout) / total_payout`
/// - `roas = revenue / total_payout`
///
/// There is deliberately no guard here. A zero payout surfaces as an infinity
/// (or `Undefined` when revenue is also zero) so callers can see it; only the
/// portfolio KPIs guard against a zero denominator. Records without a payout
/// get no metrics at all.
pub fn attach_metrics(records: &[JoinedRecord]) -> Vec<AnalysisRecord> {
    records
        .iter()
        .map(|record| {
            let metrics = record
                .payout
                .as_ref()
                .map(|p| compute(record.event.revenue, p.total_payout));

            AnalysisRecord {
                event: record.event.clone(),
                payout: record.payout.clone(),
                influencer: record.influencer.clone(),
                roi: metrics.map(|(roi, _)| roi),
                roas: metrics.map(|(_, roas)| roas),
            }
        })
        .collect()
}

/// Returns `(roi, roas)` for one revenue/payout pair.
pub fn compute(revenue: Decimal, total_payout: Decimal) -> (Ratio, Ratio) {
    let roi = match revenue.checked_sub(total_payout) {
        Some(net) => Ratio::divide(net, total_payout),
        // Only reachable near Decimal::MIN; the net is then an unbounded loss.
        None => Ratio::NegativeInfinity,
    };
    (roi, Ratio::divide(revenue, total_payout))
}
