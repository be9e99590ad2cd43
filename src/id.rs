use rand::Rng;

use crate::constants::ID_RANDOM_LEN;

const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a unique record identifier.
///
/// The id is the current Unix time in milliseconds, base-36 encoded,
/// followed by a random base-36 fragment. Collisions are possible in
/// principle but vanishingly unlikely at single-device interactive write
/// rates; ids sharing a millisecond differ only in the random fragment.
pub fn generate_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let mut id = encode_base36(millis);

    let mut rng = rand::thread_rng();
    for _ in 0..ID_RANDOM_LEN {
        id.push(char::from(BASE36_DIGITS[rng.gen_range(0..BASE36_DIGITS.len())]));
    }

    id
}

/// Render an integer in lowercase base-36
fn encode_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}
