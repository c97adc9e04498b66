use std::{fs, sync::Arc};

use crate::networks::{DEV, HOLESKY, HOODI, MAINNET, NetworkSpec};

pub fn network_parser(network_string: &str) -> Result<Arc<NetworkSpec>, String> {
    match network_string {
        "mainnet" => Ok(MAINNET.clone()),
        "holesky" => Ok(HOLESKY.clone()),
        "hoodi" => Ok(HOODI.clone()),
        "dev" => Ok(DEV.clone()),
        path => read_network_spec(path).map(Arc::new),
    }
}

fn read_network_spec(path: &str) -> Result<NetworkSpec, String> {
    let contents = fs::read_to_string(path).map_err(|err| format!("Failed to read file: {err}"))?;
    serde_yaml::from_str(&contents).map_err(|err| format!("Failed to parse YAML from: {err}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;

    use super::*;
    use crate::networks::Network;

    #[rstest]
    #[case("mainnet", Network::Mainnet)]
    #[case("holesky", Network::Holesky)]
    #[case("hoodi", Network::Hoodi)]
    #[case("dev", Network::Dev)]
    fn test_named_networks(#[case] name: &str, #[case] expected: Network) {
        let spec = network_parser(name).expect("named network should parse");
        assert_eq!(spec.network, expected);
    }

    #[test]
    fn test_custom_network_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(
            file,
            "network: dev\ngenesis_time: 100\nslots_per_epoch: 8\nseconds_per_slot: 6"
        )
        .expect("write yaml");

        let spec = network_parser(file.path().to_str().expect("utf-8 path"))
            .expect("yaml network should parse");
        assert_eq!(spec.clock().seconds_per_epoch(), 48);
        assert_eq!(spec.genesis_time, 100);
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let err = network_parser("/definitely/not/here.yaml").expect_err("should fail");
        assert!(err.starts_with("Failed to read file"));
    }
}
