use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;

const BACKGROUND: &str = "#1a1a1a";
const LABEL_FONT: &str = "Rajdhani, sans-serif";
const MUTED_ALPHA: f64 = 0.35;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let positions = state.positions();
	let t = ease_out_cubic(state.hover.highlight_t);
	ctx.set_line_width(2.0);

	for edge in &state.edges {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&edge.source), positions.get(&edge.target))
		else {
			continue;
		};

		// t=0: every edge at 0.4; t=1: incident edges at 0.8, the rest at 0.1
		let alpha = if state.is_incident(edge) {
			0.4 + 0.4 * t
		} else {
			0.4 - 0.3 * t
		};

		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(&edge.color);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
	);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let is_hovered = state.is_hovered(idx);
		let radius = state.display_radius(idx, info.radius);
		// Nodes outside the hovered neighborhood fade as the highlight eases in
		let base = if info.muted { MUTED_ALPHA } else { 1.0 };
		let dim = if has_highlight && !state.is_highlighted(idx) {
			base * (1.0 - 0.6 * t)
		} else {
			base
		};
		let fill_alpha = if is_hovered { 0.7 + 0.3 * t } else { 0.7 * dim };

		ctx.set_shadow_color(&info.color);
		ctx.set_shadow_blur(8.0);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_global_alpha(fill_alpha);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();
		ctx.set_global_alpha(dim);
		ctx.set_stroke_style_str(&info.color);
		ctx.set_line_width(3.0);
		ctx.stroke();
		ctx.set_shadow_blur(0.0);

		if state.is_selected(idx) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 6.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		ctx.set_text_align("center");
		if let Some(glyph) = &info.glyph {
			let size = if info.radius >= 25.0 { 16.0 } else { 14.0 };
			ctx.set_text_baseline("middle");
			ctx.set_font(&format!("bold {size}px sans-serif"));
			ctx.set_fill_style_str("#0a0a0a");
			let _ = ctx.fill_text(glyph, x, y);
		}

		if let Some(label) = &info.label {
			ctx.set_text_baseline("alphabetic");
			ctx.set_font(&format!("11px {LABEL_FONT}"));
			ctx.set_fill_style_str(&info.color);
			let _ = ctx.fill_text(label, x, y + info.radius + 10.0);
		}
		ctx.set_global_alpha(1.0);
	});
	ctx.set_text_align("start");
}
