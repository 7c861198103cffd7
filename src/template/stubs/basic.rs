//! Stubs for basic (non-gateway) addons.

pub const MAIN_PLUGIN: &str = r#"<?php
/**
 * Plugin Name: {{ADDON_NAME}}
 * Plugin URI: https://wptravelengine.com/plugins/{{FULL_SLUG}}/
 * Description: {{DESCRIPTION}}
 * Version: 1.0.0
 * Author: WP Travel Engine
 * Author URI: https://wptravelengine.com/
 * Requires PHP: 7.4
 * Text Domain: {{FULL_SLUG}}
 *
 * @package {{NAMESPACE}}
 */

/* Abort if this file is called directly. */
if ( ! defined( 'ABSPATH' ) ) {
	exit;
}

define( 'WPTRAVELENGINE_{{CONSTANT}}_VERSION', '1.0.0' );
define( 'WPTRAVELENGINE_{{CONSTANT}}_FILE_PATH', __FILE__ );
define( 'WPTRAVELENGINE_{{CONSTANT}}_DIR_PATH', plugin_dir_path( __FILE__ ) );
define( 'WPTRAVELENGINE_{{CONSTANT}}_DIR_URL', plugin_dir_url( __FILE__ ) );

{{PRO_COMPATIBLE_BLOCK}}
"#;

pub const PLUGIN_CLASS: &str = r#"<?php
/**
 * Plugin bootstrap class.
 *
 * @package {{NAMESPACE}}
 */

namespace {{NAMESPACE}};

{{BACKEND_API_IMPORT}}
/**
 * Main plugin class for {{TITLE}}.
 */
class Plugin {

	/**
	 * Boot the plugin.
	 *
	 * @return void
	 */
	public static function execute() {
		$self = new self();
		$self->register_hooks();
	}

	/**
	 * Register plugin hooks.
	 *
	 * @return void
	 */
	public function register_hooks() {{{ADMIN_ENQUEUE_HOOK}}{{GLOBAL_SETTINGS_HOOK}}{{TRIP_SETTINGS_HOOK}}{{API_REGISTER_CALL}}
	}
{{ENQUEUE_ADMIN_ASSETS_METHOD}}{{ADD_GLOBAL_SETTINGS_METHOD}}{{ADD_TRIP_META_METHOD}}}
"#;

pub const BACKEND_API: &str = r#"<?php
/**
 * REST API bridge.
 *
 * @package {{NAMESPACE}}
 */

namespace {{NAMESPACE}}\Backend;

use WP_REST_Request;{{GLOBAL_IMPORTS}}{{TRIP_IMPORTS}}

/**
 * Registers {{TITLE}} settings with the WP Travel Engine REST API.
 */
class API {

	/**
	 * Attach API hooks.
	 *
	 * @return void
	 */
	public static function register_hooks() {
		$instance = new self();{{GLOBAL_HOOKS}}{{TRIP_HOOKS}}
	}
{{GLOBAL_METHODS}}{{TRIP_METHODS}}}
"#;

pub const SETTINGS_GLOBALS: &str = r#"<?php
/**
 * Global settings model.
 *
 * @package {{NAMESPACE}}
 */

namespace {{NAMESPACE}}\Settings;

use WPTravelEngine\Core\Controllers\RestAPI\V2\Settings;

/**
 * Reads and writes the {{TITLE}} global settings.
 */
class Globals {

	/**
	 * API schema for the settings payload.
	 *
	 * @return array
	 */
	public static function get_api_schema(): array {
		return array(
			'type'       => 'object',
			'properties' => array(
				'enable' => array( 'type' => 'boolean' ),
			),
		);
	}

	/**
	 * Prepare settings for an API response.
	 *
	 * @param Settings $controller Settings controller.
	 *
	 * @return array
	 */
	public static function prepare_api_datas( $controller ): array {
		$settings = $controller->get_settings();

		return array(
			'enable' => 'yes' === ( $settings['{{SETTINGS_KEY}}_enable'] ?? 'no' ),
		);
	}

	/**
	 * Persist settings from an API request.
	 *
	 * @param array    $data Request payload.
	 * @param Settings $controller Settings controller.
	 *
	 * @return void
	 */
	public static function update_api_datas( array $data, $controller ): void {
		if ( isset( $data['enable'] ) ) {
			$controller->update_settings(
				array( '{{SETTINGS_KEY}}_enable' => $data['enable'] ? 'yes' : 'no' )
			);
		}
	}
}
"#;

pub const SETTINGS_TRIP_EDITS: &str = r#"<?php
/**
 * Trip meta settings model.
 *
 * @package {{NAMESPACE}}
 */

namespace {{NAMESPACE}}\Settings;

use WPTravelEngine\Core\Controllers\RestAPI\V2\Trip;

/**
 * Reads and writes the {{TITLE}} per-trip settings.
 */
class TripEdits {

	/**
	 * API schema for the trip meta payload.
	 *
	 * @return array
	 */
	public static function get_api_schema(): array {
		return array(
			'type'       => 'object',
			'properties' => array(
				'value' => array( 'type' => 'string' ),
			),
		);
	}

	/**
	 * Prepare trip meta for an API response.
	 *
	 * @param array $data Response data.
	 * @param Trip  $controller Trip controller.
	 *
	 * @return array
	 */
	public static function prepare_api_datas( array $data, $controller ): array {
		return array(
			'value' => get_post_meta( $controller->get_trip_id(), '{{SETTINGS_KEY}}', true ),
		);
	}

	/**
	 * Persist trip meta from an API request.
	 *
	 * @param Trip  $controller Trip controller.
	 * @param array $data Request payload.
	 *
	 * @return void
	 */
	public static function update_api_datas( $controller, array $data ): void {
		if ( isset( $data['value'] ) ) {
			update_post_meta( $controller->get_trip_id(), '{{SETTINGS_KEY}}', sanitize_text_field( $data['value'] ) );
		}
	}
}
"#;

pub const BUILDERS_GLOBAL_SETTINGS: &str = r#"<?php
/**
 * Global settings tab definition for {{TITLE}}.
 *
 * @package {{NAMESPACE}}
 */

return array(
	'title'  => __( '{{TITLE}}', '{{FULL_SLUG}}' ),
	'order'  => 40,
	'id'     => '{{SETTINGS_KEY}}',
	'fields' => array(
		array(
			'field_type' => 'SWITCH',
			'name'       => '{{SETTINGS_KEY}}_enable',
			'label'      => __( 'Enable {{TITLE}}', '{{FULL_SLUG}}' ),
		),
	),
);
"#;

pub const BUILDERS_TRIP_META: &str = r#"<?php
/**
 * Trip edit tab definition for {{TITLE}}.
 *
 * @package {{NAMESPACE}}
 */

return array(
	'title'  => __( '{{TITLE}}', '{{FULL_SLUG}}' ),
	'key'    => '{{SLUG}}',
	'fields' => array(
		array(
			'field_type' => 'TEXT',
			'name'       => '{{SETTINGS_KEY}}',
			'label'      => __( '{{TITLE}}', '{{FULL_SLUG}}' ),
		),
	),
);
"#;
