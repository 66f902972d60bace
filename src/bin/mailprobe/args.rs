use std::net::SocketAddr;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use mailprobe::{ProbeOptions, ReplyMatching};
use mailprobe::server::ServerConfig;

#[derive(Parser)]
#[command(name = "mailprobe", version, about = "Verify e-mail addresses over DNS and SMTP")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,

    #[command(flatten)]
    pub probe: ProbeArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// lance le serveur HTTP (POST /validate-email)
    Serve {
        /// adresse d'écoute
        #[arg(long, env = "MAILPROBE_LISTEN", default_value = "127.0.0.1:3000")]
        listen: SocketAddr,
        /// durée maximale d'une requête (secondes)
        #[arg(long = "request-timeout", env = "MAILPROBE_REQUEST_TIMEOUT", default_value_t = 30)]
        request_timeout_secs: u64,
    },
    /// vérifie une adresse et affiche le rapport
    Check {
        email: String,
        /// format de sortie (human|json)
        #[arg(long, default_value = "human")]
        format: String,
    },
}

#[derive(Args)]
pub struct ProbeArgs {
    /// nom utilisé pour HELO (par défaut le domaine du destinataire)
    #[arg(long, global = true, env = "MAILPROBE_HELO")]
    pub helo: Option<String>,
    /// enveloppe MAIL FROM
    #[arg(long = "from", global = true, env = "MAILPROBE_MAIL_FROM", default_value = "test@example.com")]
    pub mail_from: String,
    /// port SMTP des serveurs MX
    #[arg(long, global = true, env = "MAILPROBE_SMTP_PORT", default_value_t = 25)]
    pub port: u16,
    /// timeout de connexion (ms)
    #[arg(long = "connect-timeout", global = true, default_value_t = 5_000)]
    pub connect_timeout_ms: u64,
    /// attente maximale par réponse SMTP (ms)
    #[arg(long = "step-timeout", global = true, default_value_t = 5_000)]
    pub step_timeout_ms: u64,
    /// chaque ligne est une réponse (pas de regroupement des réponses multi-lignes)
    #[arg(long = "lenient-replies", global = true)]
    pub lenient_replies: bool,
}

impl ProbeArgs {
    pub fn options(&self) -> ProbeOptions {
        ProbeOptions {
            port: self.port,
            helo_domain: self.helo.clone(),
            mail_from: self.mail_from.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            step_timeout: Duration::from_millis(self.step_timeout_ms),
            reply_matching: if self.lenient_replies {
                ReplyMatching::Lenient
            } else {
                ReplyMatching::Strict
            },
        }
    }
}

pub fn server_config(listen: SocketAddr, request_timeout_secs: u64) -> ServerConfig {
    ServerConfig {
        listen,
        request_timeout: Duration::from_secs(request_timeout_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_uses_probe_defaults() {
        let cli = Cli::try_parse_from(["mailprobe", "check", "alice@example.com"]).unwrap();
        assert_eq!(cli.probe.options(), ProbeOptions::default());
        match cli.cmd {
            Commands::Check { email, format } => {
                assert_eq!(email, "alice@example.com");
                assert_eq!(format, "human");
            }
            Commands::Serve { .. } => panic!("expected check"),
        }
    }

    #[test]
    fn global_flags_reach_probe_options() {
        let cli = Cli::try_parse_from([
            "mailprobe",
            "check",
            "alice@example.com",
            "--helo",
            "probe.example.net",
            "--step-timeout",
            "250",
            "--lenient-replies",
        ])
        .unwrap();
        let options = cli.probe.options();
        assert_eq!(options.helo_domain.as_deref(), Some("probe.example.net"));
        assert_eq!(options.step_timeout, Duration::from_millis(250));
        assert_eq!(options.reply_matching, ReplyMatching::Lenient);
    }

    #[test]
    fn serve_builds_server_config() {
        let cli = Cli::try_parse_from([
            "mailprobe",
            "serve",
            "--listen",
            "0.0.0.0:8080",
            "--request-timeout",
            "10",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Serve {
                listen,
                request_timeout_secs,
            } => {
                let config = server_config(listen, request_timeout_secs);
                assert_eq!(config.listen, SocketAddr::from(([0, 0, 0, 0], 8080)));
                assert_eq!(config.request_timeout, Duration::from_secs(10));
            }
            Commands::Check { .. } => panic!("expected serve"),
        }
    }
}
