use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Picks a delay in `[min_delay, max_delay]` milliseconds. Zero when both are zero.
pub fn random_delay(min_delay: u64, max_delay: u64) -> Duration {
    if max_delay <= min_delay {
        return Duration::from_millis(min_delay);
    }
    let mut rng = StdRng::from_entropy();
    Duration::from_millis(rng.gen_range(min_delay..=max_delay))
}

/// Sleeps for a random delay between two requests to the site.
pub async fn generate_random_delay(min_delay: u64, max_delay: u64) {
    let delay = random_delay(min_delay, max_delay);
    if delay.is_zero() {
        return;
    }

    debug!("Delay: {} milliseconds", delay.as_millis());
    sleep(delay).await;
}
