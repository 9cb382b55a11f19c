// ============================================================================
// Largest-Remainder Allocator
// Hamilton apportionment of the leftover units
// ============================================================================

use crate::domain::Element;

/// Largest-remainder allocation of the units lost to truncation.
///
/// Elements are ordered by remainder (largest first), ties going to the
/// element with fewer units and then to the earlier source position. The
/// first `leftover` elements in that order receive one extra unit each.
///
/// Floating error over many weights can push the leftover past one unit per
/// element, or below zero. A larger leftover is dealt out in whole rounds
/// before the remainder order applies; a negative one is taken back from the
/// smallest remainders, never below zero units. Either way the units end up
/// summing to the multiplier.
///
/// # Example
/// ```text
/// Weights: A=146 B=123 C=323 D=982 E=457 (sum 2031), precision 0
///
/// Scaled:    A  7.19  B  6.06  C 15.90  D 48.35  E 22.50
/// Truncated: A  7     B  6     C 15     D 48     E 22     (98 units)
/// Leftover:  100 - 98 = 2
///
/// Order by remainder: C (0.90), E (0.50), D (0.35), A (0.19), B (0.06)
/// C gets 16, E gets 23 -> 7 + 6 + 16 + 48 + 23 = 100
/// ```
pub(crate) fn assign_leftover<K>(elements: &mut [Element<K>], leftover: i64) {
    if elements.is_empty() || leftover == 0 {
        return;
    }

    elements.sort_unstable_by(Element::leftover_order);

    if leftover < 0 {
        reclaim_excess(elements, leftover.unsigned_abs());
        return;
    }

    let len = elements.len() as i64;
    let rounds = leftover / len;
    let count = (leftover % len) as usize;

    if rounds > 0 {
        tracing::debug!(leftover, elements = len, "leftover exceeds one unit per element");
        for element in elements.iter_mut() {
            element.units += rounds;
        }
    }

    for element in &mut elements[..count] {
        element.units += 1;
    }
}

/// Take `excess` units back, smallest remainder first, skipping empty elements.
fn reclaim_excess<K>(elements: &mut [Element<K>], mut excess: u64) {
    tracing::debug!(excess, "truncated units exceed the multiplier");

    while excess > 0 {
        let mut taken = false;
        for element in elements.iter_mut().rev() {
            if excess == 0 {
                break;
            }
            if element.units > 0 {
                element.units -= 1;
                excess -= 1;
                taken = true;
            }
        }
        if !taken {
            break;
        }
    }
}
