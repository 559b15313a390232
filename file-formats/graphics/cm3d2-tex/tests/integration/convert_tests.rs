use crate::{pattern, pattern_png};
use cm3d2_tex::encode::encode_tex;
use cm3d2_tex::types::*;
use cm3d2_tex::uv::{read_sidecar, write_sidecar};
use cm3d2_tex::{Converter, Direction, ErrorKind, convert, open, save};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use test_log::test;

fn write_textured_tex(path: &Path, rects: Vec<Rect>) -> DecodedTexture {
    let texture = DecodedTexture::new(pattern(16, 8))
        .with_original_path("assets/texture/face.tex")
        .with_uv_rects(rects);
    fs::write(path, encode_tex(&texture).unwrap()).unwrap();
    texture
}

#[test]
fn test_tex_to_png_writes_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("face.tex");
    let rects = vec![Rect::new(0.0, 0.0, 0.5, 1.0), Rect::new(0.5, 0.0, 0.5, 1.0)];
    write_textured_tex(&input, rects.clone());

    let conversion = convert(&input).expect("Failed to convert container");

    assert_eq!(conversion.direction, Direction::TexToImage);
    assert_eq!(conversion.output, dir.path().join("face.png"));
    assert_eq!(conversion.sidecar, Some(dir.path().join("face.uv.csv")));
    assert_eq!(
        fs::read_to_string(dir.path().join("face.uv.csv")).unwrap(),
        "0;0;0.5;1\n0.5;0;0.5;1\n"
    );

    let image = open(&conversion.output).unwrap();
    assert!(image.image() == &pattern(16, 8));
    assert!(image.uv_rects().is_empty());
    assert_eq!(image.original_path(), "");
}

#[test]
fn test_no_sidecar_without_rects() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.tex");
    write_textured_tex(&input, Vec::new());

    let conversion = convert(&input).unwrap();
    assert_eq!(conversion.sidecar, None);
    assert!(!dir.path().join("plain.uv.csv").exists());
}

#[test]
fn test_png_to_tex_picks_up_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("body.png");
    fs::write(&input, pattern_png(8, 8)).unwrap();
    fs::write(dir.path().join("body.uv.csv"), "0.25;0.25;0.5;0.5\nnot;a;row\n").unwrap();

    let conversion = convert(&input).unwrap();
    assert_eq!(conversion.direction, Direction::ImageToTex);
    assert_eq!(conversion.output, dir.path().join("body.tex"));

    let texture = open(&conversion.output).unwrap();
    assert_eq!(texture.uv_rects(), &[Rect::new(0.25, 0.25, 0.5, 0.5)]);
    assert!(texture.image() == &pattern(8, 8));
}

#[test]
fn test_round_trip_through_png_keeps_rects() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hair.tex");
    let rects = vec![Rect::new(0.125, 0.25, 0.5, 0.75)];
    write_textured_tex(&input, rects.clone());

    let png = convert(&input).unwrap().output;
    // hair.tex is still there, so the new container gets a suffix
    let tex = convert(&png).unwrap().output;
    assert_eq!(tex, dir.path().join("hair1.tex"));

    let texture = open(&tex).unwrap();
    assert_eq!(texture.uv_rects(), rects.as_slice());
    assert!(texture.image() == &pattern(16, 8));
}

#[test]
fn test_collisions_get_numeric_suffixes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("foo.png");
    fs::write(&input, pattern_png(4, 4)).unwrap();
    fs::write(dir.path().join("foo.tex"), b"existing").unwrap();

    assert_eq!(convert(&input).unwrap().output, dir.path().join("foo1.tex"));
    assert_eq!(convert(&input).unwrap().output, dir.path().join("foo2.tex"));
    assert_eq!(fs::read(dir.path().join("foo.tex")).unwrap(), b"existing");
}

#[test]
fn test_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let input = dir.path().join("eye.tex");
    write_textured_tex(&input, vec![Rect::new(0.0, 0.0, 1.0, 1.0)]);

    let conversion = Converter::new()
        .with_output_dir(out.path())
        .convert(&input)
        .unwrap();
    assert_eq!(conversion.output, out.path().join("eye.png"));
    assert_eq!(conversion.sidecar, Some(out.path().join("eye.uv.csv")));
    assert!(!dir.path().join("eye.png").exists());
}

#[test]
fn test_uppercase_extension_is_container() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("SKIN.TEX");
    write_textured_tex(&input, Vec::new());

    let conversion = convert(&input).unwrap();
    assert_eq!(conversion.direction, Direction::TexToImage);
    assert_eq!(conversion.output, dir.path().join("SKIN.png"));
}

#[test]
fn test_save_tex_prefers_existing_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.tex");
    let sidecar = dir.path().join("x.uv.csv");
    write_sidecar(&sidecar, &[Rect::new(9.0, 8.0, 7.0, 6.0)]).unwrap();

    let texture = DecodedTexture::new(pattern(4, 4))
        .with_uv_rects(vec![Rect::new(1.0, 1.0, 1.0, 1.0)]);
    save(&texture, &path).unwrap();

    let saved = open(&path).unwrap();
    assert_eq!(saved.uv_rects(), &[Rect::new(9.0, 8.0, 7.0, 6.0)]);
}

#[test]
fn test_save_tex_uses_own_rects_without_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("y.tex");
    let rects = vec![Rect::new(1.0, 2.0, 3.0, 4.0)];
    let texture = DecodedTexture::new(pattern(4, 4)).with_uv_rects(rects.clone());

    save(&texture, &path).unwrap();
    assert_eq!(open(&path).unwrap().uv_rects(), rects.as_slice());
}

#[test]
fn test_save_image_writes_sidecar_and_replaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("z.png");
    fs::write(&path, b"old").unwrap();
    let rects = vec![Rect::new(0.5, 0.5, 0.25, 0.25)];
    let texture = DecodedTexture::new(pattern(4, 4)).with_uv_rects(rects.clone());

    save(&texture, &path).unwrap();
    assert!(open(&path).unwrap().image() == &pattern(4, 4));
    assert_eq!(read_sidecar(&dir.path().join("z.uv.csv")).unwrap(), Some(rects));
}

#[test]
fn test_unreadable_image_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "just some text").unwrap();

    let err = convert(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnreadableImage);
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_broken_container_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.tex");
    let bytes = encode_tex(&DecodedTexture::new(pattern(8, 8))).unwrap();
    fs::write(&input, &bytes[..bytes.len() / 2]).unwrap();

    let err = convert(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedData);
    assert!(!dir.path().join("broken.png").exists());
}

#[test]
fn test_failed_sidecar_removes_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("face.tex");
    write_textured_tex(&input, vec![Rect::new(0.0, 0.0, 1.0, 1.0)]);
    // A directory in the sidecar's place makes the table unwritable
    fs::create_dir(dir.path().join("face.uv.csv")).unwrap();

    let err = convert(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
    assert!(!dir.path().join("face.png").exists());
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_png_to_tex_skips_garbled_sidecar_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("body.png");
    fs::write(&input, pattern_png(8, 8)).unwrap();
    fs::write(
        dir.path().join("body.uv.csv"),
        b"0;0;0.5;1\n\xff\xfe;garbage\n\"0.5\";0;0.5;1\n0.5;0;0.5;1\n",
    )
    .unwrap();

    let conversion = convert(&input).expect("Failed to convert image");
    let texture = open(&conversion.output).unwrap();
    assert_eq!(
        texture.uv_rects(),
        &[Rect::new(0.0, 0.0, 0.5, 1.0), Rect::new(0.5, 0.0, 0.5, 1.0)]
    );
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert(dir.path().join("nothing.png")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
