/// `n` is prime iff `n >= 2` and nothing in `[2, floor(sqrt(n))]` divides it.
pub fn is_prime(n: i32) -> bool {
    if n < 2 {
        return false;
    }

    let n = n as i64;
    let mut i = 2i64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}
