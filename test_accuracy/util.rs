use rusty_mlp::*;
use std::fs::*;
use std::io;
use std::path::*;

/// Lists the names of the subdirectories of `dir` that name a digit.
pub fn list_dirs<P>(dir: P) -> io::Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    let mut dirs = Vec::new();
    for entry in read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if name.parse::<u32>().is_ok() => dirs.push(name),
            _ => warn!("Skipping {}.", entry.path().display()),
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Lists out the full filepaths to all files in the target directory.
pub fn list_files<P>(dir: P) -> io::Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
{
    let mut files = Vec::new();
    for entry in read_dir(dir.as_ref())? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Loads test data from per-class subdirectories `class_dirs` of a parent directory `dir` using
/// `load_fun`. The name of each subdirectory is the digit its images depict.
pub fn load_test_data<P, LoadF>(
    dir: P,
    class_dirs: &[String],
    load_fun: LoadF,
) -> Result<Vec<(Matrix, u32)>>
where
    P: AsRef<Path>,
    LoadF: Fn(&Path) -> Result<Matrix>,
{
    let mut test_data = Vec::new();
    for class_dir in class_dirs {
        let class = match class_dir.parse::<u32>() {
            Ok(class) => class,
            Err(_) => continue,
        };
        for file in list_files(dir.as_ref().join(class_dir))? {
            trace!("Load {} as {}.", file.display(), class);
            test_data.push((load_fun(&file)?, class));
        }
    }
    Ok(test_data)
}
