pub(crate) const CONFIG_SAMPLE: &str = r#"# For the file locations, If you want it to be relative to the executable directory
# use ${exe_dir}/location, or ${cwd}/location for the working directory.
# Without posts_dir, ${cwd}/src/posts is used.
[paths]
posts_dir = "${cwd}/src/posts"
# template_dir = "template"

# listing_order is either "listing" (as returned by the filesystem) or "name"
[defaults]
listing_order = "listing"

[server]
address = "0.0.0.0"
port = 8001

# [log]
# level = "Info"
# log_to_console = true
"#;
