use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Inserts `suffix` between the file stem and the extension, so that
/// `photo.png` becomes `photo-out.png` for the suffix `-out`.
/// If no extension is present, the suffix is appended to the end.
pub fn insert_suffix_before_extension(path: &Path, suffix: &str) -> PathBuf {
    let Some(file_name) = path.file_name() else {
        let mut result = path.as_os_str().to_owned();
        result.push(suffix);
        return PathBuf::from(result);
    };
    let file_name = Path::new(file_name);

    let mut new_name = OsString::new();
    match (file_name.file_stem(), file_name.extension()) {
        (Some(stem), Some(extension)) => {
            new_name.push(stem);
            new_name.push(suffix);
            new_name.push(".");
            new_name.push(extension);
        }
        _ => {
            new_name.push(file_name);
            new_name.push(suffix);
        }
    }
    path.with_file_name(new_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_out_suffix() {
        let test_cases = vec![
            ("image.png", "image-out.png"),
            ("archive.tar.gz", "archive.tar-out.gz"),
            ("nodotfile", "nodotfile-out"),
            (".bashrc", ".bashrc-out"),
            ("..hidden_file.txt", "..hidden_file-out.txt"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(
                insert_suffix_before_extension(Path::new(input), "-out"),
                PathBuf::from(expected),
                "Test failed for input: {}",
                input
            );
        }
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn append_suffix_keeps_directory() {
        let test_cases = vec![
            ("some_folder/photo.jpg", "-out", "some_folder/photo-out.jpg"),
            ("/abs/path/frame.tiff", "-2", "/abs/path/frame-2.tiff"),
            ("a/b/.hidd.en", "-out", "a/b/.hidd-out.en"),
            ("some_folder/nodotfile", "-1", "some_folder/nodotfile-1"),
        ];

        for (input, suffix, expected) in test_cases {
            assert_eq!(
                insert_suffix_before_extension(Path::new(input), suffix),
                PathBuf::from(expected),
                "Test failed for input: {}",
                input
            );
        }

        // non-UTF-8 names survive untouched
        use std::os::unix::ffi::OsStringExt;
        let input = PathBuf::from(OsString::from_vec(b"d\xffr/f\xfele.txt".to_vec()));
        let expected = PathBuf::from(OsString::from_vec(b"d\xffr/f\xfele-out.txt".to_vec()));
        assert_eq!(insert_suffix_before_extension(&input, "-out"), expected);
    }
}
