pub fn get_signature(version: &str) -> String {
    format!(
        r#"
      __________
     /\____;;___\            🧳  WTE Addon Starter (addon scaffolding for WP Travel Engine)
    | /         /
    `. ())oo() .             Scaffold payment gateways and basic addons
     |\(%()*^^()^\           with the directory layout the core plugin expects.
    %| |-%-------|
   % \ | %  ))   |           https://wptravelengine.com
   %  \|%________|
    %%%%                     v{}
"#,
        version
    )
}
