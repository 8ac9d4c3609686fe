use rand::Rng;

/// Generate a random digit code of the given length (OTP challenges).
pub fn generate_otp_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
}
