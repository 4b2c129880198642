//! Pointer offset to dial angle.

use clap::Args;
use detent_core::{Point, quadrant, resolve_angle};

#[derive(Args)]
pub struct ResolveArgs {
    /// Horizontal offset from the knob center
    #[arg(allow_negative_numbers = true)]
    x: f32,

    /// Vertical offset from the knob center, up positive
    #[arg(allow_negative_numbers = true)]
    y: f32,
}

pub fn run(args: ResolveArgs) -> anyhow::Result<()> {
    let pointer = Point::new(args.x, args.y);
    let quadrant = quadrant(pointer.x, pointer.y);
    let angle = resolve_angle(pointer, Point::default());

    println!("quadrant: {}", quadrant.number());
    println!("angle:    {angle:.4}");
    Ok(())
}
