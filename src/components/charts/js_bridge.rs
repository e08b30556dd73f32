//! Typed wrappers around chart rendering via `js_sys::eval()`.
//!
//! Chart.js is loaded from the host page as a global. The configuration is
//! serialized on the Rust side and embedded as a JSON literal; a polling
//! loop waits for the library global and the target canvas to exist before
//! constructing the chart. Failures stay on the JS side as console warnings.

use serde_json::Value;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
	let wrapped = format!(
		"try {{ {} }} catch(e) {{ console.warn('chart JS call failed:', e); }}",
		code
	);
	let _ = js_sys::eval(&wrapped);
}

/// Render a chart into the canvas with the given id, replacing any chart
/// previously bound to it. A missing canvas never resolves the poll, so an
/// absent render target is a silent no-op.
pub fn render_chart(canvas_id: &str, config: &Value) {
	call_js(&format!(
		r#"
		(function() {{
			var poll = setInterval(function() {{
				if (typeof Chart !== 'undefined' && document.getElementById('{canvas_id}')) {{
					clearInterval(poll);
					try {{
						var el = document.getElementById('{canvas_id}');
						var prev = Chart.getChart(el);
						if (prev) prev.destroy();
						new Chart(el, {config});
					}} catch(e) {{ console.error('[charts] render error:', e); }}
				}}
			}}, 100);
		}})();
		"#,
	));
}

/// Destroy the chart bound to a canvas, if any.
pub fn destroy_chart(canvas_id: &str) {
	call_js(&format!(
		"var el = document.getElementById('{canvas_id}'); \
		 if (el && typeof Chart !== 'undefined') {{ \
		 var prev = Chart.getChart(el); if (prev) prev.destroy(); }}",
	));
}
