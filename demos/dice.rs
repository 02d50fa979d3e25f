//! Resample observed data: once as discrete outcomes, once as histogram bins.

use aliasdraw::{AliasSampler, histogram};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rolls = [4, 4, 2, 2, 2, 2, 3, 1, 5, 6];
    let mut die = AliasSampler::from_observations(&rolls)?;

    let draws = die.draw(1_000_000, Some(1));
    println!("face  observed  resampled");
    for (face, weight) in die.values().iter().zip(histogram::frequencies(&rolls).1) {
        let hits = draws.iter().filter(|&&d| d == *face).count();
        println!("{face: >4}  {weight: >8.3}  {: >9.3}", hits as f64 / draws.len() as f64);
    }

    // Continuous data: sample bin centers.
    let samples: Vec<f64> = (0..1000).map(|i| ((i as f64) * 0.37).sin()).collect();
    let hist = histogram::binned(&samples, 8)?;
    let mut binned = AliasSampler::from_samples(&samples, 8)?;
    let centers = binned.draw(10, Some(7));
    println!("\nbin centers: {:.3?}", hist.centers);
    println!("bin probabilities: {:.3?}", hist.probabilities);
    println!("ten draws: {centers:.3?}");

    Ok(())
}
