use log::*;

use crate::{
    changeset::{
        changelog::render_changelog,
        date::current_date_header,
        planner::{ChangesetPlanner, ReleasePlanner},
        summary::{EntriesOptions, get_changeset_entries},
    },
    config::{ChangelogConfig, Config},
    result::Result,
};

/// Print the changelog section for all pending changesets.
pub async fn execute(config: &Config) -> Result<()> {
    let planner = ChangesetPlanner::new(config.changelog.planner_command.clone());
    let output =
        summarize(&planner, &config.changelog, &current_date_header()).await?;
    println!("{output}");
    Ok(())
}

/// Collect entries through `planner` and render them under `date_header`.
pub async fn summarize(
    planner: &dyn ReleasePlanner,
    config: &ChangelogConfig,
    date_header: &str,
) -> Result<String> {
    let mut builder = EntriesOptions::builder();
    builder
        .cwd(&config.cwd)
        .self_package(config.self_package.as_str());

    if let Some(since_ref) = &config.since_ref {
        builder.since_ref(since_ref.as_str());
    }

    if let Some(exclude) = &config.exclude {
        builder.exclude(exclude.clone());
    }

    let options = builder.build()?;

    let entries = get_changeset_entries(planner, &options).await?;

    info!("collected {} releases with pending changes", entries.releases.len());

    Ok(render_changelog(date_header, &entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        changeset::{planner::MockReleasePlanner, types::ReleasePlan},
        test_helpers::*,
    };

    #[tokio::test]
    async fn renders_configured_releases() {
        let mut planner = MockReleasePlanner::new();
        planner
            .expect_get_release_plan()
            .withf(|cwd, since_ref| {
                cwd.to_str() == Some("addon") && since_ref.is_none()
            })
            .times(1)
            .returning(|_, _| {
                Ok(ReleasePlan {
                    changesets: vec![create_test_changeset("a", "Add theme")],
                    releases: vec![
                        create_test_release("pkg-one", "1.0.1", &["a"]),
                        create_test_release(TEST_SELF_PACKAGE, "2.0.0", &[]),
                    ],
                })
            });

        let config = ChangelogConfig {
            self_package: TEST_SELF_PACKAGE.into(),
            cwd: "addon".into(),
            exclude: Some(vec![]),
            ..ChangelogConfig::default()
        };

        let output = summarize(&planner, &config, "## 05-03-2024")
            .await
            .unwrap();

        assert_eq!(
            output,
            format!(
                "## 05-03-2024\n\n### `{TEST_SELF_PACKAGE}@2.0.0`\n\n### `pkg-one@1.0.1`\n\n- Add theme\n"
            )
        );
    }

    #[tokio::test]
    async fn forwards_since_ref_and_default_exclusion() {
        let mut planner = MockReleasePlanner::new();
        planner
            .expect_get_release_plan()
            .withf(|cwd, since_ref| {
                cwd.to_str() == Some(".") && since_ref.as_deref() == Some("main")
            })
            .times(1)
            .returning(|_, _| {
                Ok(ReleasePlan {
                    changesets: vec![create_test_changeset("a", "Add theme")],
                    releases: vec![
                        create_test_release(TEST_SELF_PACKAGE, "2.0.0", &["a"]),
                        create_test_release("pkg-one", "1.0.1", &["a"]),
                    ],
                })
            });

        let config = ChangelogConfig {
            self_package: TEST_SELF_PACKAGE.into(),
            since_ref: Some("main".into()),
            ..ChangelogConfig::default()
        };

        let output = summarize(&planner, &config, "## 05-03-2024")
            .await
            .unwrap();

        assert_eq!(
            output,
            "## 05-03-2024\n\n### `pkg-one@1.0.1`\n\n- Add theme\n"
        );
    }
}
