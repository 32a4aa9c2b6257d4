use rand::Rng;

/// Uniform integers in an inclusive range. Every generator function takes
/// one of these explicitly so runs can be replayed from a seed.
pub trait NumberSource {
    fn int_in(&mut self, min: i64, max: i64) -> i64;
}

impl<R: Rng + ?Sized> NumberSource for R {
    fn int_in(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..=max)
    }
}
