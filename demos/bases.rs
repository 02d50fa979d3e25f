//! Generate reproducible random DNA with a chosen GC content.
//!
//! The sequence is drawn in chunks: the first chunk is seeded, later chunks
//! continue the same stream, so the output is identical to one big draw.

use aliasdraw::WeightedEnum;

/// Fraction of G and C bases.
const GC: f64 = 0.62;

#[derive(Copy, Clone, Debug, PartialEq, Eq, WeightedEnum)]
enum Base {
    #[weight((1.0 - GC) / 2.0)]
    A,
    #[weight(GC / 2.0)]
    C,
    #[weight(GC / 2.0)]
    G,
    #[weight((1.0 - GC) / 2.0)]
    T,
}

impl Base {
    fn letter(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const LINE: usize = 60;
    const LINES: usize = 8;

    let mut bases = Base::seeded_sampler(2024)?;
    let mut sequence = String::with_capacity(LINE * LINES);
    for _ in 0..LINES {
        let line: String = bases.draw(LINE, None).into_iter().map(Base::letter).collect();
        println!("{line}");
        sequence.push_str(&line);
    }

    let whole: String = bases
        .draw(LINE * LINES, Some(2024))
        .into_iter()
        .map(Base::letter)
        .collect();
    assert_eq!(whole, sequence);

    let gc = sequence.chars().filter(|c| matches!(c, 'G' | 'C')).count();
    println!(
        "\nGC content: {:.3} (target {GC})",
        gc as f64 / sequence.len() as f64
    );

    Ok(())
}
