//! Picker options output

use crate::common::TestEnv;
use anyhow::Result;

#[test]
fn test_default_options_json() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env.cmd(&["options", "--json"]).assert_success()?;
    let json: serde_json::Value = serde_json::from_str(&result.stdout)?;

    assert_eq!(json["sundayFirst"], false);
    assert_eq!(json["keys"]["esc"], 27);
    assert_eq!(json["colors"]["selected"], "#00a699");
    assert_eq!(json["monthNames"].as_array().map(|a| a.len()), Some(12));
    Ok(())
}

#[test]
fn test_options_reflect_config() -> Result<()> {
    let env = TestEnv::new()?;
    env.write_config(
        "[datepicker]\nsundayFirst = true\n\n[datepicker.colors]\nselectedText = \"#000\"\nselected = \"#ff0000\"\n",
    )?;

    let result = env.cmd(&["options", "--json"]).assert_success()?;
    let json: serde_json::Value = serde_json::from_str(&result.stdout)?;

    assert_eq!(json["sundayFirst"], true);
    assert_eq!(json["colors"]["selected"], "#ff0000");
    assert_eq!(json["colors"]["inRange"], "#66e2da");
    Ok(())
}

#[test]
fn test_options_toml() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env.cmd(&["options"]).assert_success()?;
    assert!(result.contains_stdout("sundayFirst = false"));
    assert!(result.contains_stdout("[keys]"));
    Ok(())
}

#[test]
fn test_colors_without_selected_text_rejected() -> Result<()> {
    let env = TestEnv::new()?;
    env.write_config("[datepicker.colors]\nselected = \"#ff0000\"\n")?;

    env.cmd(&["options"]).assert_failure()?;
    Ok(())
}
