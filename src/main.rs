mod fixture;

use crate::fixture::fixture_image;

fn main() -> anyhow::Result<()> {
    let out_path = "output.png";
    let img = fixture_image();
    println!("Writing file to {out_path}");
    img.save(out_path)?;
    Ok(())
}
