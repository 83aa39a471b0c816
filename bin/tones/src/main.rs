//! Render a grid of HCT colors: one row per hue, one column per tone, all at
//! the same requested chroma. Colors that can not be displayed at that chroma
//! show how far the gamut mapping had to reduce it.
//!
//! Usage: `hct-tones [output.png]`

use hct::{gamut::map_to_gamut_with_flags, GamutFlags, Hct, ViewingConditions};
use image::{Rgba, RgbaImage};

const CELL_SIZE: u32 = 40;
const HUES: u32 = 24;
const TONES: u32 = 11;
const CHROMA: f64 = 48.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("tones.png"));

    println!("Rendering {HUES} hues by {TONES} tones at chroma {CHROMA}");

    let mut img = RgbaImage::new(TONES * CELL_SIZE, HUES * CELL_SIZE);
    let mut reduced = 0;

    for row in 0..HUES {
        let hue = row as f64 * 360.0 / HUES as f64;
        for column in 0..TONES {
            let tone = column as f64 * 100.0 / (TONES - 1) as f64;

            let mapping =
                map_to_gamut_with_flags(hue, CHROMA, tone, ViewingConditions::standard());
            if mapping.flags.contains(GamutFlags::CHROMA_REDUCED) {
                reduced += 1;
            }

            let argb = Hct::new(hue, CHROMA, tone).to_argb();
            debug_assert_eq!(argb, mapping.argb);

            let pixel = Rgba([argb.red(), argb.green(), argb.blue(), argb.alpha()]);
            for y in 0..CELL_SIZE {
                for x in 0..CELL_SIZE {
                    img.put_pixel(column * CELL_SIZE + x, row * CELL_SIZE + y, pixel);
                }
            }
        }
    }

    println!("{reduced} of {} colors had their chroma reduced", HUES * TONES);

    img.save(&path)?;
    println!("Saved {path}");

    Ok(())
}
