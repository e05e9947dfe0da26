//! Winnowing fingerprint selection (Schleimer–Wilkerson–Aiken).
//!
//! Slides a window of `w` consecutive hashes over the sequence and selects
//! the minimum in each window, breaking ties toward the **rightmost**
//! occurrence, emitting an index only when it differs from the previously
//! emitted one. The window size and tie-break rule carry the detection
//! guarantee: any shared run of at least `w + k - 1` words between two
//! documents yields at least one shared selected hash.
//!
//! Implemented with a monotonic deque in O(n).

use std::collections::VecDeque;

/// Select winnowed indices from an ordered hash sequence.
///
/// Returns the indices of selected hashes in increasing order. Sequences of
/// length `w` or less are too short to window and every index is returned.
pub fn winnow(hashes: &[u64], w: usize) -> Vec<usize> {
    let n = hashes.len();
    if n == 0 {
        return Vec::new();
    }
    let window = w.max(1);
    if n <= window {
        // Too short to window: keep everything so the document still has a
        // comparable fingerprint.
        return (0..n).collect();
    }

    let mut out = Vec::with_capacity(n - window + 1);
    // Indices of the current window, hashes strictly increasing front to back.
    let mut dq: VecDeque<usize> = VecDeque::with_capacity(window);
    let mut last_picked: Option<usize> = None;

    // `<=` pops equal values so the newest (rightmost) index wins ties.
    let push = |dq: &mut VecDeque<usize>, i: usize| {
        while let Some(&j) = dq.back() {
            if hashes[i] <= hashes[j] {
                dq.pop_back();
            } else {
                break;
            }
        }
        dq.push_back(i);
    };

    let emit = |dq: &VecDeque<usize>, out: &mut Vec<usize>, last: &mut Option<usize>| {
        if let Some(&idx) = dq.front() {
            if *last != Some(idx) {
                out.push(idx);
                *last = Some(idx);
            }
        }
    };

    for i in 0..window {
        push(&mut dq, i);
    }
    emit(&dq, &mut out, &mut last_picked);

    for i in window..n {
        let left = i - window + 1;
        while let Some(&j) = dq.front() {
            if j < left {
                dq.pop_front();
            } else {
                break;
            }
        }
        push(&mut dq, i);
        emit(&dq, &mut out, &mut last_picked);
    }

    out
}
