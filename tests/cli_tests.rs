use lsb_conceal::raster::RasterImage;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

/// 以给定参数运行编译好的命令行程序
fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lsb_conceal"))
        .args(args)
        .output()
        .expect("Failed to run lsb_conceal binary.")
}

/// 临时目录中的路径转换为命令行参数
fn arg(path: &Path) -> &str {
    path.to_str().expect("Temporary path should be valid UTF-8.")
}

/// 一个辅助函数，用于创建给定尺寸、像素全为灰色的 PPM 测试图像
fn create_test_image(path: &Path, width: usize, height: usize) {
    RasterImage::new(height, width, vec![0x80; width * height * 3])
        .and_then(|image| image.save(path))
        .expect("Failed to create test image.");
}

/// 验证成功运行以 0 退出，且重复运行会覆盖已有输出
#[test]
fn test_successful_runs_exit_zero() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image = dir.path().join("in.ppm");
    let hidden = dir.path().join("out.ppm");
    let message = dir.path().join("m.txt");
    let recovered = dir.path().join("r.txt");

    create_test_image(&image, 10, 10);
    fs::write(&message, "exit codes")?;

    for _ in 0..2 {
        let output = run(&[
            "conceal",
            arg(&message),
            arg(&image),
            arg(&hidden),
            "1",
        ]);
        assert_eq!(output.status.code(), Some(0), "{output:?}");
    }

    let output = run(&["extract", arg(&hidden), arg(&recovered), "1"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert_eq!(fs::read_to_string(&recovered)?, "exit codes");

    let output = run(&["capacity", arg(&image), "8"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");

    Ok(())
}

/// 验证超出 1..=8 的比特数以 1 退出，且不产生输出文件
#[test]
fn test_bits_out_of_range_exit_one() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image = dir.path().join("in.ppm");
    let hidden = dir.path().join("out.ppm");
    let message = dir.path().join("m.txt");

    create_test_image(&image, 10, 10);
    fs::write(&message, "hi")?;

    for bits in ["0", "9", "-1", "two"] {
        let output = run(&["conceal", arg(&message), arg(&image), arg(&hidden), bits]);
        assert_eq!(output.status.code(), Some(1), "bits {bits}: {output:?}");
        assert!(!hidden.exists());

        let output = run(&["extract", arg(&image), arg(&message), bits]);
        assert_eq!(output.status.code(), Some(1), "bits {bits}: {output:?}");
    }
    assert_eq!(fs::read_to_string(&message)?, "hi");

    Ok(())
}

/// 验证参数数量错误以 1 退出
#[test]
fn test_wrong_argument_count_exit_one() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image = dir.path().join("in.ppm");
    let hidden = dir.path().join("out.ppm");
    let message = dir.path().join("m.txt");

    create_test_image(&image, 10, 10);
    fs::write(&message, "hi")?;

    let cases: [&[&str]; 4] = [
        &[],
        &["conceal", arg(&message), arg(&image), arg(&hidden)],
        &["extract", arg(&image)],
        &[
            "extract",
            arg(&image),
            arg(&message),
            "1",
            "extra",
        ],
    ];

    for args in cases {
        let output = run(args);
        assert_eq!(output.status.code(), Some(1), "{args:?}: {output:?}");
    }

    Ok(())
}

/// 验证容量不足时以 1 退出并报告 "Too few pixels"
#[test]
fn test_too_few_pixels_exit_one() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image = dir.path().join("tiny.ppm");
    let hidden = dir.path().join("out.ppm");
    let message = dir.path().join("m.txt");

    // 2x1 图像在 1 位深度下只有 6 位容量，装不下一个字节
    create_test_image(&image, 2, 1);
    fs::write(&message, "A")?;

    let output = run(&["conceal", arg(&message), arg(&image), arg(&hidden), "1"]);
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Too few pixels"));
    assert!(!hidden.exists());

    Ok(())
}

/// 验证格式无效或不存在的图像以 1 退出
#[test]
fn test_invalid_or_missing_image_exit_one() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image = dir.path().join("bad.ppm");
    let missing = dir.path().join("missing.ppm");
    let text = dir.path().join("out.txt");

    fs::write(&image, b"P6\n1 1\n255\n\0\0")?;

    let output = run(&["extract", arg(&image), arg(&text), "1"]);
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid image file"));

    let output = run(&["extract", arg(&missing), arg(&text), "1"]);
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(!text.exists());

    Ok(())
}

/// 验证 --help 仍以 0 退出
#[test]
fn test_help_exit_zero() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
}
