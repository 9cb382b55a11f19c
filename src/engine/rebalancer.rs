// ============================================================================
// Zero-Share Rebalancer
// Guarantees a unit to every non-negligible share without breaking the total
// ============================================================================

use crate::domain::Element;
use crate::numeric::{DistributionError, DistributionResult};

/// What the rescue pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RebalanceOutcome {
    /// Zero-unit elements that received a unit
    pub rescued: usize,
    /// Zero-unit elements left at zero for lack of a donor
    pub unresolved: usize,
}

/// Move units so that no element with a remainder above `threshold` ends at
/// zero units while another element holds two or more.
///
/// Largest-remainder allocation can starve many small shares: each of them
/// loses the remainder race to a few larger ones. Every such element gets
/// exactly one unit, paid for by a donor, so the total never changes.
///
/// # Algorithm
/// ```text
/// Sort ascending by (units, remainder, later position first):
///
///   [ 0 0 0 | 0 0 | 3 3 5 5 5 ]
///     ^       ^     ^   ^
///     |       |     |   high: first of the highest run
///     |       |     zero_end: donors start here
///     |       low: first remainder above threshold
///     negligible, stay at zero
///
/// Recipients low..zero_end, largest remainder first.
/// Donor: first element of the highest run. Taking one unit from it keeps the
/// donor region sorted; the rest of its old run starts one slot up.
/// ```
///
/// Donors must hold at least two units. Once none is left the remaining
/// recipients stay at zero, which can only happen when there are more
/// elements than units.
pub(crate) fn rescue_zero_shares<K>(
    elements: &mut [Element<K>],
    threshold: f64,
) -> RebalanceOutcome {
    let mut outcome = RebalanceOutcome::default();
    if elements.len() < 2 {
        return outcome;
    }

    elements.sort_unstable_by(Element::rebalance_order);

    let zero_end = elements.partition_point(|e| e.units == 0);
    let low = elements[..zero_end].partition_point(|e| e.remainder <= threshold);
    if low == zero_end || zero_end == elements.len() {
        return outcome;
    }

    let last = elements.len() - 1;
    let mut high = last;
    let mut recipient = zero_end;

    while recipient > low {
        recipient -= 1;

        let donor = match next_donor(elements, &mut high, zero_end) {
            Some(donor) => donor,
            None => {
                outcome.unresolved = recipient - low + 1;
                break;
            },
        };

        elements[donor].units -= 1;
        elements[recipient].units += 1;
        outcome.rescued += 1;

        // The donor's old run now starts one slot up; past the end, restart
        // from the high end.
        high = if donor < last { donor + 1 } else { last };
    }

    outcome
}

/// Walk `high` down to the first element of its run and return it if it can
/// spare a unit.
fn next_donor<K>(elements: &[Element<K>], high: &mut usize, floor: usize) -> Option<usize> {
    while *high > floor && elements[*high - 1].units == elements[*high].units {
        *high -= 1;
    }

    (elements[*high].units >= 2).then_some(*high)
}

/// Check that the units add up to `multiplier`.
///
/// # Errors
/// Returns `AllocationInvariantViolated` otherwise. That is a defect in the
/// allocator and must never reach callers as a silently wrong distribution.
pub(crate) fn verify_total<K>(elements: &[Element<K>], multiplier: i64) -> DistributionResult<()> {
    let actual: i64 = elements.iter().map(|e| e.units).sum();
    if actual != multiplier {
        tracing::error!(
            expected = multiplier,
            actual,
            elements = elements.len(),
            "rounded distribution lost or gained units"
        );
        return Err(DistributionError::AllocationInvariantViolated {
            expected: multiplier,
            actual,
        });
    }
    Ok(())
}
