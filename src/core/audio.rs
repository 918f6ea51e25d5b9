use std::{fs::File, path::Path};

use hound::WavWriter;
use log::info;
use symphonia::core::{
    audio::SampleBuffer, codecs::DecoderOptions, errors::Error as SymphoniaError,
    formats::FormatOptions, io::MediaSourceStream, meta::MetadataOptions, probe::Hint,
};
use symphonia::default::{get_codecs, get_probe};

use crate::{
    error::{PrepError, Result},
    types::SampleSequence,
};

/// Decode a mono recording into normalized `f32` samples.
pub fn read_audio<P: AsRef<Path>>(path: P) -> Result<SampleSequence> {
    let path: &Path = path.as_ref();

    let file: File = File::open(path).map_err(|e| PrepError::io(path, e))?;

    let mss: MediaSourceStream = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint: Hint = Hint::new();

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| PrepError::from_symphonia(path, e))?;

    let mut format = probed.format;
    let track = format
        .default_track()
        .ok_or_else(|| PrepError::format(path, "no default track found"))?;
    let track_id = track.id;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| PrepError::format(path, "unknown sample rate"))?;
    let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1);
    if channels != 1 {
        return Err(PrepError::format(
            path,
            format!("expected a mono recording, found {channels} channels"),
        ));
    }

    let mut decoder = get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| PrepError::from_symphonia(path, e))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break
            }
            Err(e) => return Err(PrepError::from_symphonia(path, e)),
        };
        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder
            .decode(&packet)
            .map_err(|e| PrepError::from_symphonia(path, e))?;

        let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, *decoded.spec());
        buffer.copy_interleaved_ref(decoded);

        samples.extend_from_slice(buffer.samples());
    }

    info!(
        "Read {}: rate {} Hz, length {} samples",
        path.display(),
        sample_rate,
        samples.len()
    );

    Ok(SampleSequence {
        samples,
        sample_rate,
    })
}

/// Write a mono 32-bit float WAV. Samples are stored as-is.
pub fn write_audio<P: AsRef<Path>>(path: P, sample_rate: u32, samples: &[f32]) -> Result<()> {
    let path: &Path = path.as_ref();

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| PrepError::from_hound(path, e))?;
    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| PrepError::from_hound(path, e))?;
    }

    writer
        .finalize()
        .map_err(|e| PrepError::from_hound(path, e))?;
    Ok(())
}
