/// AIFF encode adapter
///
/// There is no maintained AIFF encoding crate, so the FORM/COMM/SSND
/// layout is written directly. AIFF stores big-endian signed PCM and its
/// sample rate as an 80-bit IEEE 754 extended float.
use morph_core::{AudioData, AudioEncoder, MorphError, Result};

/// AIFF encoder writing big-endian integer PCM
pub struct AiffEncoder;

impl AudioEncoder for AiffEncoder {
    fn encode(&self, audio: &AudioData) -> Result<Vec<u8>> {
        let bit_depth = audio.bit_depth();
        if !matches!(bit_depth, 8 | 16 | 24 | 32) {
            return Err(MorphError::encode_failure(
                "aiff",
                format!("unsupported bit depth: {bit_depth}"),
            ));
        }
        let bytes_per_sample = usize::from(bit_depth / 8);
        let sample_count = audio.sample_count();
        let channel_count = audio.channel_count();

        let data_len = sample_count * channel_count * bytes_per_sample;
        let pad = data_len % 2; // chunks are word aligned
        let ssnd_len = 8 + data_len; // offset + block size + PCM
        // FORM type + COMM header/body + SSND header/body (+ pad)
        let form_len = 4 + (8 + 18) + (8 + ssnd_len) + pad;

        let mut out = Vec::with_capacity(8 + form_len + 1);
        out.extend_from_slice(b"FORM");
        out.extend_from_slice(&(form_len as u32).to_be_bytes());
        out.extend_from_slice(b"AIFF");

        // COMM: channels, frames, bit depth, extended-precision rate
        out.extend_from_slice(b"COMM");
        out.extend_from_slice(&18_u32.to_be_bytes());
        out.extend_from_slice(&(channel_count as u16).to_be_bytes());
        out.extend_from_slice(&(sample_count as u32).to_be_bytes());
        out.extend_from_slice(&bit_depth.to_be_bytes());
        out.extend_from_slice(&extended_sample_rate(audio.sample_rate()));

        // SSND: zero offset, zero block size, then interleaved PCM
        out.extend_from_slice(b"SSND");
        out.extend_from_slice(&(ssnd_len as u32).to_be_bytes());
        out.extend_from_slice(&0_u32.to_be_bytes());
        out.extend_from_slice(&0_u32.to_be_bytes());
        for sample in super::interleave(audio) {
            push_sample_be(&mut out, sample, bytes_per_sample);
        }
        if pad == 1 {
            out.push(0);
        }
        Ok(out)
    }
}

/// Append one sample as big-endian bytes at the given width
fn push_sample_be(out: &mut Vec<u8>, sample: i32, bytes_per_sample: usize) {
    let be = sample.to_be_bytes();
    out.extend_from_slice(&be[4 - bytes_per_sample..]);
}

/// Encode an integer sample rate as an 80-bit IEEE 754 extended float
/// (1 sign + 15 exponent bits, then a 64-bit mantissa with an explicit
/// integer bit)
fn extended_sample_rate(rate: u32) -> [u8; 10] {
    let mut out = [0_u8; 10];
    if rate == 0 {
        return out;
    }
    let mut mantissa = u64::from(rate);
    let mut exponent: u16 = 16_383 + 63;
    while mantissa & (1 << 63) == 0 {
        mantissa <<= 1;
        exponent -= 1;
    }
    out[0..2].copy_from_slice(&exponent.to_be_bytes());
    out[2..10].copy_from_slice(&mantissa.to_be_bytes());
    out
}
