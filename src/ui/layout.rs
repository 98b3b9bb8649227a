use crate::app::HubApp;
use crate::model::Theme;
use crate::notifications::NotificationKind;
use egui::{
    Align, Align2, CentralPanel, Color32, Context, Frame, Id, Layout, Order, ProgressBar,
    ScrollArea, Stroke, Ui,
};

pub fn top_panel(app: &mut HubApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.strong("🍃 MongoDB Learning Hub");
            ui.separator();
            for link in app.nav_links() {
                if ui.selectable_label(link.active, link.label()).clicked() {
                    app.navigate_to_section(link.section);
                }
            }
        });

        let pct = app.progress_percentage();
        ui.add(
            ProgressBar::new((pct / 100.0) as f32)
                .desired_height(8.0)
                .text(format!("{}%", pct.round())),
        );
        ui.add_space(4.0);
    });
}

pub fn bottom_panel(app: &mut HubApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            // ----------- TEMA -----------
            let label = match app.theme {
                Theme::Dark => "☀ Light mode",
                Theme::Light => "🌙 Dark mode",
            };
            if ui.button(label).clicked() {
                app.toggle_theme();
            }
            if ui.button("💾 Export progress").clicked() {
                app.export_progress();
            }
            ui.label("Alt+1..6: sections · ←/→: questions");
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel a todo lo alto con scroll (lecciones, glosario)
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    ui.with_layout(Layout::top_down(Align::Min), inner);
                });
            });
    });
}

/// Avisos en la esquina superior derecha, con botón de cierre.
pub fn notifications_overlay(app: &mut HubApp, ctx: &Context) {
    if app.notifications.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(Id::new("notifications"))
        .anchor(Align2::RIGHT_TOP, [-20.0, 20.0])
        .order(Order::Foreground)
        .show(ctx, |ui| {
            for n in app.notifications.active() {
                let color = match n.kind {
                    NotificationKind::Success => Color32::from_rgb(33, 128, 141),
                    NotificationKind::Error => Color32::from_rgb(192, 21, 47),
                    NotificationKind::Info => ui.visuals().widgets.noninteractive.bg_stroke.color,
                };
                Frame::popup(ui.style())
                    .stroke(Stroke::new(1.0, color))
                    .show(ui, |ui| {
                        ui.set_min_width(300.0);
                        ui.horizontal(|ui| {
                            ui.label(n.message.as_str());
                            if ui.small_button("✖").clicked() {
                                dismissed = Some(n.id);
                            }
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(id) = dismissed {
        app.notifications.dismiss(id);
    }
}
