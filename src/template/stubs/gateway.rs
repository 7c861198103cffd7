//! Stubs for payment gateway addons.

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
define( 'WPTRAVELENGINE_{{CONSTANT}}_GATEWAY_ID', '{{GATEWAY_ID}}' );

{{PRO_COMPATIBLE_BLOCK}}
"#;

pub const PLUGIN_CLASS: &str = r#"<?php
/**
 * Plugin bootstrap class.
 *
 * @package {{NAMESPACE}}
 */

namespace {{NAMESPACE}};

/**
 * Main plugin class for the {{TITLE}} payment gateway.
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
	public function register_hooks() {
		add_filter( 'wptravelengine_payment_gateways', array( $this, 'register_gateway' ) );
		add_filter( 'wptravelengine_settings:tabs:extensions', array( $this, 'add_global_settings' ) );
	}

	/**
	 * Register the {{TITLE}} gateway.
	 *
	 * @param array $gateways Registered gateways.
	 *
	 * @return array
	 */
	public function register_gateway( array $gateways ): array {
		$gateways['{{GATEWAY_ID}}'] = Payment::class;

		return $gateways;
	}

	/**
	 * Add global settings.
	 *
	 * @param array $tab_settings Tab settings.
	 *
	 * @return array
	 */
	public function add_global_settings( array $tab_settings ): array {
		$tab_settings['sub_tabs'][] = require_once WPTRAVELENGINE_{{CONSTANT}}_DIR_PATH . 'includes/Builders/global-settings.php';

		return $tab_settings;
	}
}
"#;

pub const PAYMENT: &str = r#"<?php
/**
 * Payment handler.
 *
 * @package {{NAMESPACE}}
 */

namespace {{NAMESPACE}};

use {{NAMESPACE}}\Builders\API;
use WPTravelEngine\Abstracts\PaymentGateway;

/**
 * {{TITLE}} payment gateway handler.
 */
class Payment extends PaymentGateway {

	/**
	 * Gateway identifier.
	 *
	 * @return string
	 */
	public function get_gateway_id(): string {
		return '{{GATEWAY_ID}}';
	}

	/**
	 * Gateway label shown on checkout.
	 *
	 * @return string
	 */
	public function get_label(): string {
		return __( '{{TITLE}}', '{{FULL_SLUG}}' );
	}

	/**
	 * Process a booking payment.
	 *
	 * @param object $booking Booking in progress.
	 * @param object $payment Payment record.
	 *
	 * @return void
	 */
	public function process_payment( $booking, $payment ): void {
		$api     = new API();
		$request = $api->build_request( $booking );

		// TODO: send $request to the {{TITLE}} checkout endpoint and
		// redirect the customer to the returned payment URL.
	}
}
"#;

pub const BUILDERS_API: &str = r#"<?php
/**
 * Payment request/response adapter.
 *
 * @package {{NAMESPACE}}
 */

namespace {{NAMESPACE}}\Builders;

/**
 * Builds {{TITLE}} checkout requests and unpacks responses.
 */
class API {

	/**
	 * Build the request payload for a booking.
	 *
	 * @param object $booking Booking in progress.
	 *
	 * @return array
	 */
	public function build_request( $booking ): array {
		return array(
			'amount'    => $booking->get_total(),
			'currency'  => $booking->get_currency(),
			'reference' => '{{SLUG}}-' . $booking->get_booking_id(),
		);
	}

	/**
	 * Extract the payment status from a gateway response.
	 *
	 * @param array $response Decoded gateway response.
	 *
	 * @return string
	 */
	public function parse_response( array $response ): string {
		return $response['status'] ?? 'failed';
	}
}
"#;

pub const GLOBAL_SETTINGS: &str = r#"<?php
/**
 * Global settings tab definition for the {{TITLE}} gateway.
 *
 * @package {{NAMESPACE}}
 */

return array(
	'title'  => __( '{{TITLE}}', '{{FULL_SLUG}}' ),
	'order'  => 30,
	'id'     => '{{SETTINGS_KEY}}',
	'fields' => array(
		array(
			'field_type' => 'SWITCH',
			'name'       => '{{GATEWAY_ID}}',
			'label'      => __( 'Enable {{TITLE}}', '{{FULL_SLUG}}' ),
		),
		array(
			'field_type' => 'TEXT',
			'name'       => '{{SETTINGS_KEY}}_api_key',
			'label'      => __( 'API Key', '{{FULL_SLUG}}' ),
		),
	),
);
"#;
