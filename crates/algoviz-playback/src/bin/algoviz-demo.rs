//! Algoviz demo
//!
//! Runs a binary search over a generated sorted array, prints its analysis
//! and replays the animation with every fired step logged.
//!
//! Usage: `algoviz-demo [size] [target] [speed]`

use std::env;

use algoviz_animation::{AnimationConfig, AnimationService};
use algoviz_complexity::{compare_algorithms, AlgorithmEntry};
use algoviz_playback::{PlaybackConfig, Session};
use algoviz_steps::{BinarySearch, LinearSearch, SearchAlgorithm};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algoviz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();

    let size: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(32);
    let target: f64 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or((size as f64 * 0.7).floor() * 3.0);
    let speed: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(4.0);

    let data: Vec<f64> = (0..size).map(|i| i as f64 * 3.0).collect();

    println!("Algoviz Demo");
    println!("============");
    println!();
    println!("Searching for {} in {} sorted elements", target, size);

    let service = AnimationService::new(AnimationConfig::default().with_speed(speed));
    let (_, mut events) = service.subscribe_channel();
    tokio::spawn(async move {
        while let Some(fired) = events.recv().await {
            tracing::debug!(
                sequence = %fired.sequence_id,
                step = fired.step_index,
                target = ?fired.step.target,
                action = ?fired.step.action,
                "fired"
            );
        }
    });

    let (session, trace) = Session::search(
        &BinarySearch,
        &data,
        target,
        service,
        PlaybackConfig::default(),
    )?;

    let analysis = session.analysis();
    println!();
    println!("Result:");
    println!("  Found: {} (index {})", trace.found, trace.index());
    println!("  Comparisons: {}", trace.comparisons);
    println!("  Steps: {}", trace.steps.len());
    println!("  Complexity: {} ({}% efficient)", analysis.notation(), analysis.efficiency);
    println!("  {}", analysis.plain_language_explanation);

    let linear = LinearSearch.execute(&data, target)?;
    let comparison = compare_algorithms(
        &[
            AlgorithmEntry::new("Binary search", BinarySearch.name(), trace.comparisons as u64),
            AlgorithmEntry::new("Linear search", LinearSearch.name(), linear.comparisons as u64),
        ],
        size as u64,
    );
    println!();
    println!("{}", comparison.explanation);

    let coordinator = session.coordinator().clone();
    coordinator.on_step_change(|index, step| {
        println!("  [{:>2}] {}", index, step.description);
    });

    println!();
    println!("Replaying at {}x:", speed);
    let outcome = coordinator.play().await?;
    tracing::info!(?outcome, "replay finished");

    println!();
    println!("{}", serde_json::to_string_pretty(&session.report())?);

    Ok(())
}
