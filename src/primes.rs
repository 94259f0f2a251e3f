/// Returns the first `count` primes in ascending order.
pub fn generate_primes(count: usize) -> Vec<u64> {
    let mut primes: Vec<u64> = Vec::with_capacity(count);
    let mut candidate = 2u64;

    while primes.len() < count {
        let is_prime = primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0);

        if is_prime {
            primes.push(candidate);
        }
        candidate += 1;
    }

    primes
}
