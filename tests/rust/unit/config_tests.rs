//! Mappers built from YAML configuration

#[cfg(test)]
mod config_tests {
    use rowmapper::{record, ConfigError, Mapper, MapperConfig, MapperError, NameCase};

    record! {
        #[derive(Debug, Default)]
        #[allow(non_snake_case)]
        pub struct Account {
            #[db = "account_id"]
            pub ID: i64,
            pub DisplayName: String,
            pub CreatedAt: String,
        }
    }

    #[test]
    fn test_mapper_from_yaml_config() {
        let config = MapperConfig::from_yaml_str(
            r#"
tag_key: db
comma: ";"
mark: "$"
name_case: snake
"#,
        )
        .unwrap();

        let mapper = Mapper::<Account>::from_config(&config, &["*"]).unwrap();
        assert_eq!(mapper.columns(), ["account_id", "display_name", "created_at"]);
        assert_eq!(mapper.columns_string(), "account_id;display_name;created_at");
        assert_eq!(mapper.marks(), "$;$;$");
    }

    #[test]
    fn test_default_config_matches_new() -> anyhow::Result<()> {
        let from_config = Mapper::<Account>::from_config(&MapperConfig::default(), &["*"])?;
        let plain = Mapper::<Account>::new(&["*"])?;

        assert_eq!(from_config.columns(), plain.columns());
        assert_eq!(from_config.columns(), ["id", "displayname", "createdat"]);
        assert_eq!(from_config.marks(), plain.marks());
        Ok(())
    }

    #[test]
    fn test_direct_name_case() -> anyhow::Result<()> {
        let config = MapperConfig {
            name_case: NameCase::Direct,
            ..Default::default()
        };
        let mapper = Mapper::<Account>::from_config(&config, &["DisplayName"])?;
        assert_eq!(mapper.columns_string(), "DisplayName");
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = MapperConfig::from_yaml_str("comma: \"?\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_from_config_rejects_same_comma_and_mark() {
        let config = MapperConfig {
            comma: '?',
            ..Default::default()
        };

        let err = Mapper::<Account>::from_config(&config, &["*"]).unwrap_err();
        match err {
            MapperError::InvalidConfig { message } => {
                assert!(message.contains("comma and mark must differ"), "{}", message)
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_from_config_rejects_newline_delimiter() {
        let config = MapperConfig {
            comma: '\n',
            ..Default::default()
        };
        assert!(matches!(
            Mapper::<Account>::from_config(&config, &["*"]),
            Err(MapperError::InvalidConfig { .. })
        ));
    }
}
