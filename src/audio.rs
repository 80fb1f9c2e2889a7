use crate::constants::*;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct AmbientVoice {
    osc: web::OscillatorNode,
    gain: web::GainNode,
}

struct AmbientGraph {
    master: web::GainNode,
    filter: web::BiquadFilterNode,
    voices: Vec<AmbientVoice>,
}

impl AmbientGraph {
    fn teardown(self) {
        for v in &self.voices {
            #[allow(deprecated)]
            let _ = v.osc.stop();
            _ = v.osc.disconnect();
            _ = v.gain.disconnect();
        }
        _ = self.filter.disconnect();
        _ = self.master.disconnect();
    }
}

/// Soft low-passed sine triad used as page ambience. The context is created
/// lazily on first start since browsers only allow audio after a gesture.
#[derive(Default)]
pub struct AmbientSound {
    ctx: Option<web::AudioContext>,
    graph: Option<AmbientGraph>,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

impl AmbientSound {
    pub fn is_playing(&self) -> bool {
        self.graph.is_some()
    }

    pub fn context(&mut self) -> anyhow::Result<web::AudioContext> {
        if let Some(ctx) = &self.ctx {
            return Ok(ctx.clone());
        }
        let ctx = web::AudioContext::new().map_err(|e| anyhow!("{:?}", e))?;
        self.ctx = Some(ctx.clone());
        Ok(ctx)
    }

    /// Build the triad and fade it in. No-op if already playing.
    pub fn start(&mut self) -> anyhow::Result<()> {
        if self.is_playing() {
            return Ok(());
        }
        let audio_ctx = self.context()?;

        let master = create_gain(&audio_ctx, AMBIENT_SILENT_GAIN, "Master")?;
        _ = master.connect_with_audio_node(&audio_ctx.destination());

        let filter = web::BiquadFilterNode::new(&audio_ctx)
            .map_err(|e| anyhow!("BiquadFilterNode error: {:?}", e))?;
        filter.set_type(web::BiquadFilterType::Lowpass);
        filter.frequency().set_value(AMBIENT_LOWPASS_HZ);
        filter.q().set_value(AMBIENT_LOWPASS_Q);
        _ = filter.connect_with_audio_node(&master);

        let mut voices = Vec::with_capacity(AMBIENT_TRIAD_HZ.len());
        for &hz in AMBIENT_TRIAD_HZ.iter() {
            let osc = web::OscillatorNode::new(&audio_ctx)
                .map_err(|e| anyhow!("OscillatorNode error: {:?}", e))?;
            osc.set_type(web::OscillatorType::Sine);
            osc.frequency().set_value(hz);
            let gain = create_gain(&audio_ctx, AMBIENT_SILENT_GAIN, "Voice")?;
            _ = osc.connect_with_audio_node(&gain);
            _ = gain.connect_with_audio_node(&filter);
            #[allow(deprecated)]
            let _ = osc.start();
            voices.push(AmbientVoice { osc, gain });
        }

        let now = audio_ctx.current_time();
        _ = master
            .gain()
            .exponential_ramp_to_value_at_time(AMBIENT_MASTER_GAIN, now + AMBIENT_FADE_IN_SEC);

        self.graph = Some(AmbientGraph {
            master,
            filter,
            voices,
        });
        log::info!("[sound] ambient on");
        Ok(())
    }

    /// Fade out, then disconnect the graph once the ramp has finished.
    pub fn stop(&mut self) {
        let (Some(graph), Some(audio_ctx)) = (self.graph.take(), self.ctx.as_ref()) else {
            return;
        };
        let end = audio_ctx.current_time() + AMBIENT_FADE_OUT_SEC;
        _ = graph
            .master
            .gain()
            .exponential_ramp_to_value_at_time(AMBIENT_SILENT_GAIN, end);

        let teardown = Closure::once_into_js(move || graph.teardown());
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                teardown.unchecked_ref(),
                AMBIENT_TEARDOWN_MS,
            );
        }
        log::info!("[sound] ambient off");
    }
}
