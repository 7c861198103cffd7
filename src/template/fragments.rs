//! Conditional fragment bodies. Each fragment is either inserted verbatim or
//! replaced with empty text; the slot itself always resolves. Bodies may
//! reference substitution tokens but never other fragments.

use crate::template::FragmentSet;
use crate::types::answers::{AnswerSet, SettingsType};

/// Bootstrap block for addons distributed through the Pro licensing layer.
pub const PRO_BOOTSTRAP: &str = r#"add_action( 'plugins_loaded', function () {
	wptravelengine_pro_config( __FILE__, array(
		'id'           => 557,
		'slug'         => '{{FULL_SLUG}}',
		'plugin_name'  => '{{ADDON_NAME}}',
		'file_path'    => __FILE__,
		'version'      => WPTRAVELENGINE_{{CONSTANT}}_VERSION,
		'dependencies' => [],
		'execute'      => '{{NAMESPACE}}\Plugin',
	) );
}, 9 );"#;

/// Bootstrap block for standalone addons.
pub const STANDALONE_BOOTSTRAP: &str = r#"/**
 * Load plugin after checking dependencies.
 */
function wptravelengine_{{FUNCTION_SLUG}}_init() {
	require_once __DIR__ . '/vendor/autoload.php';

	// Initialize the plugin
	if ( class_exists( '{{NAMESPACE}}\Plugin' ) ) {
		{{NAMESPACE}}\Plugin::execute();
	}
}
add_action( 'plugins_loaded', 'wptravelengine_{{FUNCTION_SLUG}}_init', 9 );"#;

const BACKEND_API_IMPORT: &str = "use {{NAMESPACE}}\\Backend\\API;\n";

const ADMIN_ENQUEUE_HOOK: &str =
    "\n\t\tadd_action( 'admin_enqueue_scripts', array( $this, 'enqueue_admin_assets' ) );";

const GLOBAL_SETTINGS_HOOK: &str = "\n\t\tadd_filter( 'wptravelengine_settings:tabs:extensions', array( $this, 'add_global_settings' ) );";

const TRIP_SETTINGS_HOOK: &str = "\n\t\tadd_filter( 'wp_travel_engine_admin_trip_meta_tabs', array( $this, 'add_trip_meta_tabs' ) );";

const API_REGISTER_CALL: &str = "\n\n\t\tAPI::register_hooks();";

const ENQUEUE_ADMIN_ASSETS_METHOD: &str = r#"
	/**
	 * Enqueue admin script.
	 *
	 * @return void
	 */
	public function enqueue_admin_assets() {
		$admin_script_path = WPTRAVELENGINE_{{CONSTANT}}_DIR_PATH . 'dist/admin.asset.php';
		$screen            = get_current_screen();
		if ( file_exists( $admin_script_path ) && ( $screen->post_type === 'trip' || $screen->id === 'booking_page_class-wp-travel-engine-admin' ) ) {
			$asset = require $admin_script_path;
			wp_enqueue_script(
				'{{FULL_SLUG}}-admin',
				WPTRAVELENGINE_{{CONSTANT}}_DIR_URL . 'dist/admin.js',
				array_merge( $asset['dependencies'], array( 'wp-hooks', 'wptravelengine-exports' ) ),
				$asset['version'],
				true
			);
		}
	}
"#;

const ADD_GLOBAL_SETTINGS_METHOD: &str = r#"
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
"#;

const ADD_TRIP_META_METHOD: &str = r#"
	/**
	 * Add trip meta tab.
	 *
	 * @param array $tabs Trip meta tabs.
	 *
	 * @return array
	 */
	public function add_trip_meta_tabs( array $tabs ): array {
		$tabs['{{SLUG}}'] = require_once WPTRAVELENGINE_{{CONSTANT}}_DIR_PATH . 'includes/Builders/trip-meta.php';
		return $tabs;
	}
"#;

const GLOBAL_IMPORTS: &str = "\nuse WPTravelEngine\\Core\\Controllers\\RestAPI\\V2\\Settings;\nuse {{NAMESPACE}}\\Settings\\Globals as MyGlobals;";

const TRIP_IMPORTS: &str = "\nuse WPTravelEngine\\Core\\Controllers\\RestAPI\\V2\\Trip;\nuse {{NAMESPACE}}\\Settings\\TripEdits as MyTripEdits;";

const GLOBAL_HOOKS: &str = "\n\t\tadd_filter( 'wptravelengine_settings_api_schema', array( $instance, 'global_schema' ), 10, 2 );\n\t\tadd_filter( 'wptravelengine_rest_prepare_settings', array( $instance, 'prepare_settings' ), 10, 3 );\n\t\tadd_action( 'wptravelengine_api_update_settings', array( $instance, 'update_settings' ), 10, 2 );";

const TRIP_HOOKS: &str = "\n\t\tadd_filter( 'wptravelengine_trip_api_schema', array( $instance, 'trip_edit_schema' ), 10, 2 );\n\t\tadd_filter( 'wptravelengine_rest_prepare_trip', array( $instance, 'prepare_trip_meta' ), 10, 3 );\n\t\tadd_action( 'wptravelengine_api_update_trip', array( $instance, 'update_trip_meta' ), 10, 2 );";

const GLOBAL_METHODS: &str = r#"
	/**
	 * Add Global Settings Schema.
	 *
	 * @param array    $schema Schema.
	 * @param Settings $instance Instance of the Settings class.
	 *
	 * @return array
	 */
	public function global_schema( array $schema, Settings $instance ): array {
		$schema['{{SETTINGS_KEY}}'] = MyGlobals::get_api_schema();
		return $schema;
	}

	/**
	 * Prepare Global Settings.
	 *
	 * @param array           $settings Settings.
	 * @param WP_REST_Request $request Request.
	 * @param Settings        $settings_controller Instance of the Settings class.
	 *
	 * @return array
	 */
	public function prepare_settings( array $settings, WP_REST_Request $request, Settings $settings_controller ): array {
		$settings['{{SETTINGS_KEY}}'] = MyGlobals::prepare_api_datas( $settings_controller );
		return $settings;
	}

	/**
	 * Update Global Settings.
	 *
	 * @param WP_REST_Request $request Request.
	 * @param Settings        $settings_controller Instance of the Settings class.
	 *
	 * @return void
	 */
	public function update_settings( WP_REST_Request $request, Settings $settings_controller ): void {
		if ( is_array( $request['{{SETTINGS_KEY}}'] ?? null ) ) {
			MyGlobals::update_api_datas( $request['{{SETTINGS_KEY}}'], $settings_controller );
		}
	}
"#;

const TRIP_METHODS: &str = r#"
	/**
	 * Add Trip Meta Schema.
	 *
	 * @param array $properties Properties.
	 *
	 * @return array
	 */
	public function trip_edit_schema( array $properties ): array {
		$properties['{{SETTINGS_KEY}}'] = MyTripEdits::get_api_schema();
		return $properties;
	}

	/**
	 * Prepare Trip Meta.
	 *
	 * @param array           $data Data.
	 * @param WP_REST_Request $request Request.
	 * @param Trip            $controller Instance of the Trip class.
	 *
	 * @return array
	 */
	public function prepare_trip_meta( array $data, WP_REST_Request $request, Trip $controller ): array {
		$data['{{SETTINGS_KEY}}'] = MyTripEdits::prepare_api_datas( $data, $controller );
		return $data;
	}

	/**
	 * Update Trip Meta.
	 *
	 * @param WP_REST_Request $request Request.
	 * @param Trip            $controller Instance of the Trip class.
	 *
	 * @return void
	 */
	public function update_trip_meta( WP_REST_Request $request, Trip $controller ): void {
		if ( is_array( $request['{{SETTINGS_KEY}}'] ?? null ) ) {
			MyTripEdits::update_api_datas( $controller, $request['{{SETTINGS_KEY}}'] );
		}
	}
"#;

const PRO_CONFIG_DEPENDENCY: &str =
    ",\n        \"codewing-solutions/wptravelengine-pro-config\": \"dev-main\"";

const WEBPACK_SCRIPTS: &str = "\n        \"start\": \"npx wp-scripts start --mode development\",\n        \"build\": \"npx wp-scripts build --mode production\",";

const WEBPACK_BUILD: &str = " && npm run build";

const WEBPACK_DEV_DEPENDENCIES: &str = "\n        \"@wordpress/scripts\": \"^30.5.1\",\n        \"lodash\": \"^4.17.21\",\n        \"react-hook-form\": \"~7.54.2\",";

const WEBPACK_DEPENDENCIES: &str = ",\n    \"dependencies\": {\n        \"@emotion/react\": \"^11.14.0\",\n        \"@emotion/styled\": \"^11.14.1\",\n        \"@wordpress/block-editor\": \"^14.2.0\",\n        \"@wordpress/blocks\": \"^14.2.0\",\n        \"react-query\": \"^3.39.3\",\n        \"react-toastify\": \"^10.0.6\",\n        \"styled-components\": \"^6.1.13\"\n    }";

const DIST_FILE_LIST: &str = "\n\t\t\t\t\t\t\t'dist/**',";

/// Fragments for the main entry file: pro-compatible or standalone bootstrap.
pub fn main_plugin_fragments(requires_pro: bool) -> FragmentSet {
    let mut set = FragmentSet::empty();
    let block = if requires_pro {
        PRO_BOOTSTRAP
    } else {
        STANDALONE_BOOTSTRAP
    };
    set.insert("PRO_COMPATIBLE_BLOCK", block);
    set
}

/// The five individually gated hooks plus three method bodies of the basic
/// addon Plugin class.
pub fn plugin_class_fragments(answers: &AnswerSet) -> FragmentSet {
    let settings = answers.settings_type;
    let mut set = FragmentSet::empty();
    set.insert_if(
        "BACKEND_API_IMPORT",
        settings != SettingsType::None,
        BACKEND_API_IMPORT,
    );
    set.insert_if("ADMIN_ENQUEUE_HOOK", answers.use_webpack, ADMIN_ENQUEUE_HOOK);
    set.insert_if("GLOBAL_SETTINGS_HOOK", settings.has_global(), GLOBAL_SETTINGS_HOOK);
    set.insert_if("TRIP_SETTINGS_HOOK", settings.has_trip_edit(), TRIP_SETTINGS_HOOK);
    set.insert_if(
        "API_REGISTER_CALL",
        settings != SettingsType::None,
        API_REGISTER_CALL,
    );
    set.insert_if(
        "ENQUEUE_ADMIN_ASSETS_METHOD",
        answers.use_webpack,
        ENQUEUE_ADMIN_ASSETS_METHOD,
    );
    set.insert_if(
        "ADD_GLOBAL_SETTINGS_METHOD",
        settings.has_global(),
        ADD_GLOBAL_SETTINGS_METHOD,
    );
    set.insert_if(
        "ADD_TRIP_META_METHOD",
        settings.has_trip_edit(),
        ADD_TRIP_META_METHOD,
    );
    set
}

/// The global and trip import/hook/method triples of the REST API bridge,
/// gated independently.
pub fn backend_api_fragments(settings: SettingsType) -> FragmentSet {
    let mut set = FragmentSet::empty();
    set.insert_if("GLOBAL_IMPORTS", settings.has_global(), GLOBAL_IMPORTS);
    set.insert_if("TRIP_IMPORTS", settings.has_trip_edit(), TRIP_IMPORTS);
    set.insert_if("GLOBAL_HOOKS", settings.has_global(), GLOBAL_HOOKS);
    set.insert_if("TRIP_HOOKS", settings.has_trip_edit(), TRIP_HOOKS);
    set.insert_if("GLOBAL_METHODS", settings.has_global(), GLOBAL_METHODS);
    set.insert_if("TRIP_METHODS", settings.has_trip_edit(), TRIP_METHODS);
    set
}

pub fn composer_fragments(requires_pro: bool) -> FragmentSet {
    let mut set = FragmentSet::empty();
    set.insert_if("PRO_CONFIG_DEPENDENCY", requires_pro, PRO_CONFIG_DEPENDENCY);
    set
}

pub fn package_fragments(use_webpack: bool) -> FragmentSet {
    let mut set = FragmentSet::empty();
    set.insert_if("WEBPACK_SCRIPTS", use_webpack, WEBPACK_SCRIPTS);
    set.insert_if("WEBPACK_BUILD", use_webpack, WEBPACK_BUILD);
    set.insert_if("WEBPACK_DEV_DEPENDENCIES", use_webpack, WEBPACK_DEV_DEPENDENCIES);
    set.insert_if("WEBPACK_DEPENDENCIES", use_webpack, WEBPACK_DEPENDENCIES);
    set
}

pub fn gruntfile_fragments(use_webpack: bool) -> FragmentSet {
    let mut set = FragmentSet::empty();
    set.insert_if("DIST_FILE_LIST", use_webpack, DIST_FILE_LIST);
    set
}
