//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar chart lives in `assets/js/*.js` and is loaded at runtime.
//! The scripts are evaluated as globals (no ES modules) and exposed on
//! `window.*`. This module wraps them in Rust functions that serialize the
//! data and call those globals.

// Embed the D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CDash JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Append a `<script src>` tag to the document head, once per `src`.
pub fn load_script(src: &str) {
    let src_literal = serde_json::to_string(src).unwrap_or_default();
    call_js(&format!(
        r#"
        (function(src) {{
            if (document.querySelector('script[src="' + src + '"]')) return;
            var s = document.createElement('script');
            s.src = src;
            document.head.appendChild(s);
        }})({src_literal});
        "#,
    ));
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define `renderBarChart(...)` and the tooltip helpers
/// via `function` declarations. They are evaluated at global scope with an
/// indirect `eval()` once D3 is ready, then promoted to `window.*`.
/// Safe to call more than once; only the first call installs the scripts.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__cdashChartScripts && !window.__cdashChartsReady) {{ window.__cdashChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__cdashChartsPolling || window.__cdashChartsReady) return;
            window.__cdashChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__cdashChartScripts);
                    delete window.__cdashChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__cdashChartsReady = true;
                    console.log('CDash charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
    log::info!("[CDash] js_bridge: Chart scripts queued");
}

/// Render the selected company's bar chart.
///
/// Polls until D3.js is loaded, the chart scripts are initialized, and the
/// container DOM element exists. A newer call for the same container
/// cancels a still-pending older one.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    // JSON string literals are valid JS string literals.
    let data_literal = serde_json::to_string(data_json).unwrap_or_default();
    let config_literal = serde_json::to_string(config_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            window.__cdashPending = window.__cdashPending || {{}};
            if (window.__cdashPending['{container_id}']) {{
                clearInterval(window.__cdashPending['{container_id}']);
            }}
            var poll = setInterval(function() {{
                if (window.__cdashChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    delete window.__cdashPending['{container_id}'];
                    try {{
                        window.renderBarChart('{container_id}', {data_literal}, {config_literal});
                    }} catch(e) {{ console.error('[CDash] renderBarChart error:', e); }}
                }}
            }}, 50);
            window.__cdashPending['{container_id}'] = poll;
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
