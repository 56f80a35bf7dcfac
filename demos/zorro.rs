use pictura::types::{Color, Vector};
use pictura::{DrawingContext, LineCapStyle, StrokeStyle, paint, path, ppm};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(out) = std::env::args().nth(1) else {
        miette::bail!("usage: zorro OUT.ppm");
    };

    let mark = path(
        &[
            Vector::new(0.1, 0.9),
            Vector::new(0.8, 0.9),
            Vector::new(0.1, 0.2),
            Vector::new(0.9, 0.3),
        ],
        StrokeStyle::new(Color::BLACK)
            .with_width(0.01)
            .with_cap(LineCapStyle::Butt),
    );

    let mut cx = DrawingContext::new(500);
    paint(&mut cx, &mark);
    ppm::save_ppm(&cx, &out)?;
    tracing::info!(path = %out, "wrote picture");
    Ok(())
}
