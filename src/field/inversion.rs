use super::PRIME;

/// Compute x^-1 modulo p, or 0 if x = 0 (mod p).
///
/// Accepts any 64-bit input. The result, when it exists, is in (0, p).
///
/// This is Knuth's unsigned two-variable form of the extended Euclidean
/// algorithm, specialized for the prime and unrolled by two steps so that the
/// cofactor signs alternate implicitly instead of being tracked. Remainders
/// strictly decrease on every step.
///
/// NB: the running time depends on the input. Do not use on secret values.
pub fn inverse(x: u64) -> u64 {
    let mut u3 = x % PRIME;
    if u3 == 0 {
        return 0;
    }
    let mut u1 = 1u64;

    let mut v1 = PRIME / u3;
    let mut v3 = PRIME % u3;

    loop {
        if v3 == 0 {
            // u3 is gcd(x, p), which is 1 for every nonzero residue.
            return if u3 == 1 { u1 } else { 0 };
        }

        let qt = u3 / v3;
        u3 %= v3;
        u1 += qt * v1;

        if u3 == 0 {
            return if v3 == 1 { PRIME - v1 } else { 0 };
        }

        let qt = v3 / u3;
        v3 %= u3;
        v1 += qt * u1;
    }
}
