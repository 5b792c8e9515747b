const C_SOURCES: [&str;1] = ["parser.c"];
const C_HEADERS: [&str;1] = ["tree_sitter/parser.h"];

fn main() -> Result<(), std::io::Error> {
    let src_dir = match std::env::var_os("CARGO_MANIFEST_DIR") {
        None => return Ok(()),
        Some(root) => std::path::Path::new(&root).join("src"),
    };

    let mut c_config = cc::Build::new();
    c_config.std("c11").include(&src_dir);
    c_config.flag_if_supported("-Wno-unused-parameter");
    c_config.flag_if_supported("-Wno-unused-but-set-variable");
    c_config.flag_if_supported("-Wno-trigraphs");
    if std::env::var("CARGO_CFG_TARGET_ENV").map(|env| env=="msvc").unwrap_or(false) {
        c_config.flag("-utf-8");
    }

    for name in C_SOURCES {
        let path = src_dir.join(name);
        if !path.exists() {
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound,format!("missing generated source {}",path.display())));
        }
        c_config.file(&path);
        println!("cargo:rerun-if-changed={}",path.display());
    }
    for name in C_HEADERS {
        println!("cargo:rerun-if-changed={}",src_dir.join(name).display());
    }

    c_config.compile("tree-sitter-freebasic");

    Ok(())
}
