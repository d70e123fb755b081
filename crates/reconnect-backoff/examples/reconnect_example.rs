//! Example: Pacing a reconnect loop with an attempt counter
//!
//! This example demonstrates:
//! 1. A resetting counter over a capped, jittered exponential strategy
//! 2. A decrementing counter built from configuration
//! 3. The async sleep path
//!
//! Run with:
//! ```bash
//! cargo run -p reconnect-backoff --example reconnect_example
//! ```

use reconnect_backoff::prelude::*;
use std::error::Error;
use std::time::Instant;

/// A simulated broker connection that fails a fixed number of times
struct FlakyBroker {
    failures_left: u32,
}

impl FlakyBroker {
    fn connect(&mut self) -> Result<(), std::io::Error> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            Err(std::io::Error::other("connection refused"))
        } else {
            Ok(())
        }
    }
}

/// Example 1: Resetting counter with capped, jittered exponential backoff
fn example_resetting() -> Result<(), Box<dyn Error>> {
    println!("\n=== Example 1: Resetting Counter ===\n");

    let strategy = Clamped::at_most(
        Jittered::new(Exponential::with_factor(2.0, 0.01), 0.1),
        0.2,
    );
    let mut counter = AttemptCounter::resetting(strategy);
    let mut broker = FlakyBroker { failures_left: 4 };

    let start = Instant::now();
    loop {
        match broker.connect() {
            Ok(()) => {
                counter.success()?;
                println!("  Connected after {:?}", start.elapsed());
                break;
            }
            Err(err) => {
                counter.failed();
                println!(
                    "  Attempt {} failed ({}), waiting {:.3}s",
                    counter.attempts(),
                    err,
                    counter.backoff()?
                );
                counter.sleep()?;
            }
        }
    }

    println!("  Attempts after success: {}", counter.attempts());
    Ok(())
}

/// Example 2: Decrementing counter from JSON configuration
fn example_from_config() -> Result<(), Box<dyn Error>> {
    println!("\n=== Example 2: Decrementing Counter from Config ===\n");

    let config = CounterConfig::from_json(
        r#"{
            "strategy": {
                "backoff": { "kind": "linear", "slope": 0.02, "intercept": 0.01 },
                "max": 0.1
            },
            "on_success": "decrement"
        }"#,
    )?;
    let mut counter = config.build()?;

    for connected in [false, false, false, true, true, false] {
        if connected {
            counter.success()?;
            println!("  success -> attempts = {}", counter.attempts());
        } else {
            counter.failed();
            println!(
                "  failure -> attempts = {}, waiting {:.3}s",
                counter.attempts(),
                counter.backoff()?
            );
            counter.sleep()?;
        }
    }
    Ok(())
}

/// Example 3: Async sleep on the tokio timer
async fn example_async() -> Result<(), Box<dyn Error>> {
    println!("\n=== Example 3: Async Sleep ===\n");

    let mut counter = AttemptCounter::decrementing(Constant::new(0.05));
    counter.failed();

    let start = Instant::now();
    counter.sleep_async().await?;
    println!("  Slept {:?} on the tokio timer", start.elapsed());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    example_resetting()?;
    example_from_config()?;
    example_async().await?;
    Ok(())
}
