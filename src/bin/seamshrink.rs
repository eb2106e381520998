// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamshrink::{difference_image, energy_to_image, Carved, CarveError, SeamCarver};
use std::process;

#[macro_use]
extern crate clap;

use clap::{App, Arg, ArgMatches};
use failure::{Error, ResultExt};
use image::{DynamicImage, GenericImageView};
use log::info;

// The carver takes 8-bit RGB or RGBA.  Anything else the decoder hands
// back is converted to whichever of those keeps its alpha.
fn carve_dynamic(image: &DynamicImage, seams: u32) -> Result<Carved, CarveError> {
    let progress = |done: u32, total: u32| info!("Processing seam {}/{}", done, total);
    match image {
        DynamicImage::ImageRgb8(rgb) => SeamCarver::new(rgb).carve_with_progress(seams, progress),
        DynamicImage::ImageRgba8(rgba) => {
            SeamCarver::new(rgba).carve_with_progress(seams, progress)
        }
        _ if image.color().has_alpha() => {
            SeamCarver::new(&image.to_rgba8()).carve_with_progress(seams, progress)
        }
        _ => SeamCarver::new(&image.to_rgb8()).carve_with_progress(seams, progress),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();
    let seams = value_t!(matches, "seams", u32).unwrap_or_else(|e| e.exit());

    let original = image::open(input).context(format!("could not read {}", input))?;
    let (width, height) = original.dimensions();
    info!("Original size: {} x {}", width, height);

    let carved = carve_dynamic(&original, seams).context(format!("could not carve {}", input))?;

    let (new_width, new_height) = carved.image.dimensions();
    info!("New size: {} x {}", new_width, new_height);
    info!(
        "Pixels removed: {}",
        u64::from(width) * u64::from(height) - u64::from(new_width) * u64::from(new_height)
    );

    carved
        .image
        .save(output)
        .context(format!("could not write {}", output))?;

    if let Some(path) = matches.value_of("energy") {
        energy_to_image(&carved.energy)
            .save(path)
            .context(format!("could not write {}", path))?;
    }

    if let Some(path) = matches.value_of("diff") {
        difference_image(&original.to_rgb8(), &carved.image)
            .save(path)
            .context(format!("could not write {}", path))?;
    }

    Ok(())
}

fn main() {
    let matches = App::new("seamshrink")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Narrow an image by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to narrow")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the narrowed image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("seams")
                .help("How many columns to remove")
                .short("n")
                .long("seams")
                .value_name("COUNT")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Also write the final energy map here")
                .long("energy")
                .value_name("FILE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("diff")
                .help("Also write the difference from the resized original here")
                .long("diff")
                .value_name("FILE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .help("More logging; repeat for even more")
                .short("v")
                .long("verbose")
                .multiple(true),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(&matches) {
        let mut causes = err.iter_chain();
        if let Some(first) = causes.next() {
            eprintln!("error: {}", first);
        }
        for cause in causes {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
