//! Modulo-N arithmetic on the circular slide coordinate.
//!
//! Positions are fractional slide indices on a loop of `n` slides. Every
//! helper treats `n == 0` as an empty loop and returns zero rather than
//! dividing by it.

/// True modulo for integer indices: the result is always in `[0, n)`, also
/// for negative input.
#[inline]
pub fn wrap_index(i: i64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    i.rem_euclid(n as i64) as usize
}

/// True modulo for fractional positions: the result is in `[0, n)`.
#[inline]
pub fn wrap(x: f32, n: usize) -> f32 {
    if n == 0 {
        return 0.0;
    }
    let len = n as f32;
    let wrapped = x.rem_euclid(len);
    // rem_euclid can round up to exactly `len` for tiny negative inputs.
    if wrapped >= len { 0.0 } else { wrapped }
}

/// Signed circular distance from `from` to `to`, taking the short way
/// around. The result lies in `(-n/2, n/2]`: an exact half-loop tie always
/// resolves to the positive direction, in every caller.
#[inline]
pub fn shortest_delta(from: f32, to: f32, n: usize) -> f32 {
    if n == 0 {
        return 0.0;
    }
    let len = n as f32;
    let d = wrap(to - from, n);
    if d > len / 2.0 { d - len } else { d }
}

/// Nearest slide index to a fractional position (half rounds up).
#[inline]
pub fn nearest_index(position: f32, n: usize) -> usize {
    wrap_index(round_half_up(position), n)
}

/// Round half toward positive infinity, so `-0.5` and `0.5` both move
/// forward along the loop.
#[inline]
pub fn round_half_up(x: f32) -> i64 {
    (x + 0.5).floor() as i64
}
