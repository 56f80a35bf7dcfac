use pictura::{gallery, ppm};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(out) = std::env::args().nth(1) else {
        miette::bail!("usage: quartet OUT.ppm");
    };
    let Some(picture) = gallery::find("quartet") else {
        miette::bail!("no gallery picture named quartet");
    };

    let cx = picture.render();
    ppm::save_ppm(&cx, &out)?;
    tracing::info!(path = %out, "wrote picture");
    Ok(())
}
