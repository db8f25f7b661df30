//! Buffer algorithms shared by the enumerable realizations.
//!
//! Every function here reads from a borrowed slice and returns a freshly
//! allocated buffer, so the caller's storage is never aliased.

use rand::Rng;

/// Returns the receiver's indices in the order a stable merge sort by `less`
/// puts them.
///
/// `less(p, q, i)` is asked whether `p` must precede `q`, where `i` is the
/// current position of `p` in the buffer being merged. Elements the comparator does not
/// separate keep their relative order. The sort never panics, even for a
/// comparator that is not a strict weak ordering.
pub(crate) fn sorted_indices<T, F>(elements: &[T], less: &mut F) -> Vec<usize>
where
    F: FnMut(&T, &T, usize) -> bool,
{
    let length = elements.len();
    let mut current: Vec<usize> = (0..length).collect();
    let mut merged: Vec<usize> = Vec::with_capacity(length);
    let mut width = 1usize;

    while width < length {
        merged.clear();
        let mut low = 0;
        while low < length {
            let middle = low.saturating_add(width).min(length);
            let high = middle.saturating_add(width).min(length);
            let (mut left, mut right) = (low, middle);
            while left < middle && right < high {
                let (left_index, right_index) = (current[left], current[right]);
                if less(&elements[right_index], &elements[left_index], right) {
                    merged.push(right_index);
                    right += 1;
                } else {
                    merged.push(left_index);
                    left += 1;
                }
            }
            merged.extend_from_slice(&current[left..middle]);
            merged.extend_from_slice(&current[right..high]);
            low = high;
        }
        std::mem::swap(&mut current, &mut merged);
        width = width.saturating_mul(2);
    }
    current
}

/// Clones `elements` into the order given by `indices`.
pub(crate) fn gather<T: Clone>(elements: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&index| elements[index].clone()).collect()
}

/// Fisher-Yates over a working copy of `elements`.
///
/// For `i` from `len - 1` down to `1`, an index `j` in `[0, i]` is drawn,
/// the working element `j` is moved to destination slot `i` and removed from
/// the working copy. The last remaining element lands in slot `0`. For a
/// fixed generator state the permutation is reproducible.
pub(crate) fn shuffled<T, R>(elements: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut working = elements.to_vec();
    let length = working.len();
    // Filled back to front, reversed at the end.
    let mut destination = Vec::with_capacity(length);
    for upper in (1..length).rev() {
        let drawn = rng.gen_range(0..=upper);
        destination.push(working.remove(drawn));
    }
    destination.extend(working.pop());
    destination.reverse();
    destination
}
