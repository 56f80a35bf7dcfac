use camino::{Utf8Path, Utf8PathBuf};
use miette::{IntoDiagnostic, WrapErr};
use pictura::gallery::{PICTURES, Picture};
use pictura::ppm;
use rayon::prelude::*;
use std::time::Instant;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  render-gallery [OUT_DIR] [--resolution N]    Render every gallery picture to PPM");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "render-gallery" => {
            let options = GalleryOptions::parse(&args[2..])?;
            render_gallery(&options)
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

#[derive(Debug)]
struct GalleryOptions {
    out_dir: Utf8PathBuf,
    /// Overrides each picture's native resolution.
    resolution: Option<u32>,
}

impl GalleryOptions {
    fn parse(args: &[String]) -> miette::Result<Self> {
        let mut out_dir = None;
        let mut resolution = None;
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--resolution" => {
                    let Some(value) = iter.next() else {
                        miette::bail!("--resolution needs a value");
                    };
                    let value: u32 = value
                        .parse()
                        .into_diagnostic()
                        .wrap_err_with(|| format!("bad resolution `{value}`"))?;
                    if value == 0 {
                        miette::bail!("resolution must be at least 1");
                    }
                    resolution = Some(value);
                }
                flag if flag.starts_with("--") => miette::bail!("unknown option {flag}"),
                path if out_dir.is_none() => out_dir = Some(Utf8PathBuf::from(path)),
                extra => miette::bail!("unexpected argument {extra}"),
            }
        }

        let out_dir = match out_dir {
            Some(dir) => dir,
            None => Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
                .parent()
                .map(|root| root.join("demos/out"))
                .unwrap_or_else(|| Utf8PathBuf::from("demos/out")),
        };
        Ok(GalleryOptions { out_dir, resolution })
    }
}

fn render_gallery(options: &GalleryOptions) -> miette::Result<()> {
    std::fs::create_dir_all(&options.out_dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("creating {}", options.out_dir))?;

    let started = Instant::now();
    let written = PICTURES
        .par_iter()
        .map(|picture| render_one(picture, options))
        .collect::<miette::Result<Vec<Utf8PathBuf>>>()?;

    for path in &written {
        eprintln!("wrote {path}");
    }
    tracing::info!(
        count = written.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "gallery rendered"
    );
    Ok(())
}

fn render_one(picture: &Picture, options: &GalleryOptions) -> miette::Result<Utf8PathBuf> {
    let resolution = options.resolution.unwrap_or(picture.resolution);
    let started = Instant::now();
    let cx = picture.render_at(resolution);
    let path = options.out_dir.join(format!("{}.ppm", picture.name));
    ppm::save_ppm(&cx, &path).wrap_err_with(|| format!("writing {path}"))?;
    tracing::debug!(
        name = picture.name,
        resolution,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "rendered"
    );
    Ok(path)
}
