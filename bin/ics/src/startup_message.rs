const ICS_VERSION: &str = env!("CARGO_PKG_VERSION");
const ICS_CARGO_FEATURES: &str = env!("ICS_CARGO_FEATURES");

pub fn startup_message() -> String {
    let cargo_features = if ICS_CARGO_FEATURES.is_empty() {
        "none"
    } else {
        ICS_CARGO_FEATURES
    };
    format!(
        "
  ██╗ ██████╗███████╗
  ██║██╔════╝██╔════╝
  ██║██║     ███████╗
  ██║██║     ╚════██║
  ██║╚██████╗███████║
  ╚═╝ ╚═════╝╚══════╝

 Version          : {ICS_VERSION}
 Build Platform   : {}-{}
 Cargo Features   : {cargo_features}
",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
