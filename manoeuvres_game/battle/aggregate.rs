use manoeuvres_types::battle::{SideTotals, UnitContribution};

/// Sums unit contributions into side totals.
///
/// Each unit's figures are floored before being added up.
pub fn aggregate<I>(contributions: I) -> SideTotals
where
    I: IntoIterator<Item = UnitContribution>,
{
    contributions
        .into_iter()
        .fold(SideTotals::default(), |mut totals, contribution| {
            let offensive = contribution.offensive.floor() as i64;
            let defensive = contribution.defensive.floor() as i64;

            totals.casualties_inflicted += contribution.casualties_inflicted.floor() as i64;
            totals.offensive_contribution += offensive;
            totals.defensive_contribution += defensive;
            totals.total_contribution += offensive + defensive;
            totals
        })
}
