//! Load a PPM and paint it four times: as is, mirrored, turned, and sheared.

use miette::WrapErr;
use pictura::types::Vector;
use pictura::{DrawingContext, Painter, flip_horiz, paint, ppm, rotate90, transform};
use pictura::gallery::quartet;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(input), Some(out)) = (args.next(), args.next()) else {
        miette::bail!("usage: warp IN.ppm OUT.ppm");
    };

    let raster = ppm::load_ppm(&input).wrap_err_with(|| format!("reading {input}"))?;
    let image = Painter::from_raster(raster);
    let sheared = transform(&image, Vector::new(0.0, 0.0), Vector::new(0.75, 0.25), Vector::new(0.25, 1.0));
    let picture = quartet(&image, &flip_horiz(&image), &rotate90(&image), &sheared);

    let mut cx = DrawingContext::new(800);
    paint(&mut cx, &picture);
    ppm::save_ppm(&cx, &out).wrap_err_with(|| format!("writing {out}"))?;
    tracing::info!(path = %out, "wrote picture");
    Ok(())
}
