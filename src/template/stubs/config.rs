//! Shared config-group stubs.

pub const COMPOSER_JSON: &str = r#"{
    "name": "codewing-solutions/{{FULL_SLUG}}",
    "description": "{{DESCRIPTION}}",
    "type": "wordpress-plugin",
    "license": "GPL-2.0-or-later",
    "autoload": {
        "psr-4": {
            "{{NAMESPACE}}\\": "includes/"
        }
    },
    "require": {
        "php": ">=7.4"{{PRO_CONFIG_DEPENDENCY}}
    },
    "require-dev": {
        "wp-coding-standards/wpcs": "^3.0"
    },
    "config": {
        "allow-plugins": {
            "dealerdirect/phpcodesniffer-composer-installer": true
        }
    }
}
"#;

pub const PACKAGE_JSON: &str = r#"{
    "name": "{{FULL_SLUG}}",
    "version": "1.0.0",
    "description": "{{DESCRIPTION}}",
    "scripts": {{{WEBPACK_SCRIPTS}}
        "package": "grunt package{{WEBPACK_BUILD}}"
    },
    "devDependencies": {{{WEBPACK_DEV_DEPENDENCIES}}
        "grunt": "^1.6.1",
        "grunt-contrib-compress": "^2.0.0"
    }{{WEBPACK_DEPENDENCIES}}
}
"#;

pub const GRUNTFILE: &str = r#"module.exports = function ( grunt ) {
	grunt.initConfig( {
		compress: {
			main: {
				options: {
					archive: '{{FULL_SLUG}}.zip'
				},
				files: [
					{
						src: [
							'**',{{DIST_FILE_LIST}}
							'!node_modules/**',
							'!src/**',
							'!*.zip'
						],
						dest: '{{FULL_SLUG}}/'
					}
				]
			}
		}
	} );

	grunt.loadNpmTasks( 'grunt-contrib-compress' );
	grunt.registerTask( 'package', [ 'compress' ] );
};
"#;

pub const PHPCS_XML: &str = r#"<?xml version="1.0"?>
<ruleset name="{{ADDON_NAME}}">
	<description>Coding standards for {{ADDON_NAME}}.</description>

	<file>.</file>
	<exclude-pattern>vendor/*</exclude-pattern>
	<exclude-pattern>node_modules/*</exclude-pattern>
	<exclude-pattern>dist/*</exclude-pattern>

	<rule ref="WordPress">
		<exclude name="WordPress.Files.FileName"/>
	</rule>

	<config name="text_domain" value="{{FULL_SLUG}}"/>
	<config name="minimum_supported_wp_version" value="6.0"/>
</ruleset>
"#;

pub const README_TXT: &str = r#"=== {{ADDON_NAME}} ===
Contributors: wptravelengine
Tags: travel, booking, wp-travel-engine
Requires at least: 6.0
Tested up to: 6.6
Requires PHP: 7.4
Stable tag: 1.0.0
License: GPLv2 or later
License URI: https://www.gnu.org/licenses/gpl-2.0.html

{{DESCRIPTION}}

== Description ==

{{DESCRIPTION}}

== Changelog ==

= 1.0.0 =
* Initial release.
"#;

pub const GITIGNORE: &str = r#"/vendor/
/node_modules/
/dist/
*.zip
.DS_Store
"#;

pub const WEBPACK_CONFIG: &str = r#"const defaultConfig = require( '@wordpress/scripts/config/webpack.config' );
const path = require( 'path' );

module.exports = {
	...defaultConfig,
	entry: {
		admin: path.resolve( process.cwd(), 'src/admin/js', 'index.js' ),
		public: path.resolve( process.cwd(), 'src/public/js', 'index.js' ),
	},
	output: {
		...defaultConfig.output,
		path: path.resolve( process.cwd(), 'dist' ),
	},
};
"#;
