//! Placeholder source files for the webpack asset group.

pub const ADMIN_JS: &str = r#"/**
 * {{ADDON_NAME}} admin entry.
 */
import { addFilter } from '@wordpress/hooks';

addFilter( 'wptravelengine.settings.fields', '{{FULL_SLUG}}', ( fields ) => {
	return fields;
} );
"#;

pub const PUBLIC_JS: &str = r#"/**
 * {{ADDON_NAME}} public entry.
 */
import '../scss/index.scss';
"#;

pub const PUBLIC_SCSS: &str = r#"// {{ADDON_NAME}} public styles.

.{{FULL_SLUG}} {
	display: block;
}
"#;
