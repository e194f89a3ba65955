/// Exact binomial coefficient C(n, k).
///
/// Returns 0 when k > n, which the detectors rely on as a legitimate
/// "no such completion" signal rather than an error. Computed by
/// incremental multiply-then-divide: after the i-th step the running
/// product is C(n-k+i, i), always an integer, so nothing here can
/// overflow a u128 for the 45..52 unseen-card populations we draw from.
pub fn choose(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    // C(n, k) == C(n, n - k), take the shorter loop
    let k = k.min(n - k);
    let mut result = 1u128;
    for i in 1..=k {
        result = result * (n - k + i) as u128 / i as u128;
    }
    result
}
