use crate::{pattern, pattern_png};
use cm3d2_tex::encode::{encode_tex, save_tex, write_tex};
use cm3d2_tex::parser::{load_tex, parse_tex, read_texture};
use cm3d2_tex::types::*;
use cm3d2_tex::ErrorKind;
use pretty_assertions::assert_eq;

fn legacy_container(payload: Vec<u8>) -> Vec<u8> {
    let container = TexContainer {
        header: TexHeader {
            version: TEX_VERSION_LEGACY,
            original_path: "assets/texture/old.tex".to_string(),
            uv_rects: Vec::new(),
            width: 0,
            height: 0,
            format: TextureFormat::Argb32,
        },
        payload,
    };
    let mut out = Vec::new();
    write_tex(&container, &mut out).expect("Failed to write container");
    out
}

#[test]
fn test_round_trip_keeps_pixels_path_and_rects() {
    let rects = vec![
        Rect::new(0.0, 0.0, 0.5, 0.5),
        Rect::new(0.5, 0.5, 0.5, 0.5),
    ];
    let texture = DecodedTexture::new(pattern(32, 16))
        .with_original_path("assets/texture/body001.tex")
        .with_uv_rects(rects.clone());

    let bytes = encode_tex(&texture).expect("Failed to encode container");
    let decoded = read_texture(&bytes).expect("Failed to read container");

    assert_eq!(decoded.width(), 32);
    assert_eq!(decoded.height(), 16);
    assert_eq!(decoded.original_path(), "assets/texture/body001.tex");
    assert_eq!(decoded.uv_rects(), rects.as_slice());
    assert!(decoded.pixels() == texture.pixels());
}

#[test]
fn test_version_1000_takes_size_from_png() {
    let bytes = legacy_container(pattern_png(64, 32));
    let container = parse_tex(&bytes).expect("Failed to parse legacy container");

    assert_eq!(container.header.version, 1000);
    assert_eq!((container.header.width, container.header.height), (64, 32));
    assert_eq!(container.header.format, TextureFormat::Argb32);
    assert!(container.header.uv_rects.is_empty());

    let texture = read_texture(&bytes).expect("Failed to decode legacy container");
    assert_eq!((texture.width(), texture.height()), (64, 32));
    assert!(texture.image() == &pattern(64, 32));
}

#[test]
fn test_rgb24_payload_decodes_opaque() {
    let rgb = image::DynamicImage::ImageRgba8(pattern(4, 4)).into_rgb8();
    let mut payload = std::io::Cursor::new(Vec::new());
    rgb.write_to(&mut payload, image::ImageFormat::Png)
        .expect("Failed to encode RGB PNG");
    let container = TexContainer {
        header: TexHeader {
            version: TEX_VERSION_DIMENSIONS,
            original_path: String::new(),
            uv_rects: Vec::new(),
            width: 4,
            height: 4,
            format: TextureFormat::Rgb24,
        },
        payload: payload.into_inner(),
    };
    let mut bytes = Vec::new();
    write_tex(&container, &mut bytes).unwrap();

    let texture = read_texture(&bytes).unwrap();
    assert!(texture.image().pixels().all(|p| p.0[3] == 0xff));
}

#[test]
fn test_reencoded_container_is_canonical() {
    let bytes = legacy_container(pattern_png(8, 8));
    let texture = read_texture(&bytes).unwrap();
    let container = parse_tex(&encode_tex(&texture).unwrap()).unwrap();

    assert_eq!(container.header.version, TEX_VERSION_DIMENSIONS);
    assert_eq!(container.header.format, TextureFormat::Argb32);
    assert_eq!(container.header.original_path, "assets/texture/old.tex");
    assert_eq!((container.header.width, container.header.height), (8, 8));
}

#[test]
fn test_truncated_file_reports_kind() {
    let texture = DecodedTexture::new(pattern(16, 16));
    let bytes = encode_tex(&texture).unwrap();
    let err = read_texture(&bytes[..bytes.len() - 10]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedData);
}

#[test]
fn test_garbage_png_payload_is_unreadable() {
    let container = TexContainer {
        header: TexHeader {
            version: TEX_VERSION_DIMENSIONS,
            original_path: String::new(),
            uv_rects: Vec::new(),
            width: 4,
            height: 4,
            format: TextureFormat::Argb32,
        },
        payload: vec![0x42; 64],
    };
    let mut bytes = Vec::new();
    write_tex(&container, &mut bytes).unwrap();
    assert_eq!(
        read_texture(&bytes).unwrap_err().kind(),
        ErrorKind::UnreadableImage
    );
}

#[test]
fn test_non_container_bytes_are_bad_magic() {
    let err = read_texture(&pattern_png(4, 4)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadMagic);
}

#[test]
fn test_save_then_load_tex() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.tex");
    let container = parse_tex(&legacy_container(pattern_png(4, 2))).unwrap();

    save_tex(&container, &path).expect("Failed to save container");
    assert_eq!(load_tex(&path).unwrap(), container);
}

#[test]
fn test_load_missing_tex() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_tex(dir.path().join("missing.tex")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
