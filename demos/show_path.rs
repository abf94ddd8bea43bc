use anyhow::Result;
use path_kit::{FsPath, directory_content};

fn main() -> Result<()> {
    env_logger::init();

    let exe = std::env::args().next().unwrap_or_default();

    let app_path = FsPath::new(exe);
    println!("app path = {}", app_path);

    let dir_path = app_path.parent();
    println!("dir path = {}", dir_path);

    for entry in directory_content(&dir_path, true)? {
        println!("{}", entry);
    }

    Ok(())
}
