use crate::error::AnalyticsError;
use crate::record::JoinedRecord;
use core_types::{ConversionEvent, Influencer, InfluencerId, Payout};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Left-joins events to payouts, then to influencers, on influencer identity.
///
/// Every event yields exactly one record, in input order. Unmatched sides are
/// `None`; a missing match is never an error. Duplicate identities on either
/// lookup side are rejected because they would break the one-record-per-event
/// contract.
pub fn left_join(
    events: &[ConversionEvent],
    payouts: &[Payout],
    influencers: &[Influencer],
) -> Result<Vec<JoinedRecord>, AnalyticsError> {
    let payout_index = build_index("payout", payouts, |p| p.influencer_id)?;
    let influencer_index = build_index("influencer", influencers, |i| i.influencer_id)?;

    let records = events
        .iter()
        .map(|event| JoinedRecord {
            event: event.clone(),
            payout: payout_index.get(&event.influencer_id).map(|p| (*p).clone()),
            influencer: influencer_index.get(&event.influencer_id).map(|i| (*i).clone()),
        })
        .collect();

    Ok(records)
}

/// Builds the hash side of the join.
fn build_index<'a, T, F>(
    table: &'static str,
    rows: &'a [T],
    key: F,
) -> Result<HashMap<InfluencerId, &'a T>, AnalyticsError>
where
    F: Fn(&T) -> InfluencerId,
{
    let mut index = HashMap::with_capacity(rows.len());
    for row in rows {
        match index.entry(key(row)) {
            Entry::Occupied(slot) => {
                return Err(AnalyticsError::DuplicateKey { table, id: *slot.key() });
            }
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
        }
    }
    Ok(index)
}
