use digipin_rs::{DigipinError, PinCell};

fn main() -> Result<(), DigipinError> {
    // Dak Bhawan, New Delhi
    let lat = 28.622788;
    let lon = 77.213033;

    let cell = PinCell::from_latlon(lat, lon)?;

    println!("DIGIPIN: {}", cell.formatted());
    println!("Center: ({:.6}, {:.6})", cell.latitude(), cell.longitude());

    let restored = PinCell::from_pin(&cell.id)?;
    println!("Decoded center: ({:.6}, {:.6})", restored.latitude(), restored.longitude());

    Ok(())
}
